use crate::geometry::Segment;

/// Connects consecutive offset lines into a zig-zag cable run.
///
/// Each adjacent pair `(a, b)` yields one cable segment, alternating between
/// `a.p1 -> b.p2` and `a.p2 -> b.p1`, starting with the former. Lines are
/// neither reordered nor grouped, so `n` lines give `n - 1` segments and
/// every endpoint comes from the input.
#[derive(Debug)]
pub struct TraceCable<'a> {
    lines: &'a [Segment],
}

impl<'a> TraceCable<'a> {
    /// Creates a new trace over `lines`, in the order they should be visited.
    #[must_use]
    pub fn new(lines: &'a [Segment]) -> Self {
        Self { lines }
    }

    /// Executes the trace.
    #[must_use]
    pub fn execute(&self) -> Vec<Segment> {
        let mut flip = false;
        self.lines
            .windows(2)
            .map(|pair| {
                let (a, b) = (&pair[0], &pair[1]);
                let seg = if flip {
                    Segment::new(a.p2, b.p1)
                } else {
                    Segment::new(a.p1, b.p2)
                };
                flip = !flip;
                seg
            })
            .collect()
    }
}
