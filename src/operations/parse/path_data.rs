use tracing::debug;

use crate::error::{ParseError, Result};
use crate::math::Point2;

/// Curve-family commands. They are recognised so that their arguments are
/// not mistaken for another command's, but they contribute no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Cubic,
    SmoothCubic,
    Quadratic,
    SmoothQuadratic,
    Arc,
}

/// A path command, identified by its letter. Upper- and lower-case letters
/// map to the same command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    HorizontalTo,
    VerticalTo,
    ClosePath,
    Curve(CurveKind),
}

impl PathCommand {
    /// Maps a command letter to its command, or `None` for any other character.
    #[must_use]
    pub fn from_letter(c: char) -> Option<Self> {
        let cmd = match c.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalTo,
            'V' => Self::VerticalTo,
            'Z' => Self::ClosePath,
            'C' => Self::Curve(CurveKind::Cubic),
            'S' => Self::Curve(CurveKind::SmoothCubic),
            'Q' => Self::Curve(CurveKind::Quadratic),
            'T' => Self::Curve(CurveKind::SmoothQuadratic),
            'A' => Self::Curve(CurveKind::Arc),
            _ => return None,
        };
        Some(cmd)
    }
}

/// Parses a path description (the `d` attribute of an SVG path) into the
/// ordered boundary polyline.
///
/// Only move, line, horizontal, vertical and close-path commands produce
/// points. Relative and absolute variants are treated identically, and each
/// command consumes only its first argument(s).
#[derive(Debug)]
pub struct ParsePathData<'a> {
    data: &'a str,
}

impl<'a> ParsePathData<'a> {
    /// Creates a new parse operation over `data`.
    #[must_use]
    pub fn new(data: &'a str) -> Self {
        Self { data }
    }

    /// Executes the parse.
    ///
    /// The result may be empty, e.g. for a description made of curve
    /// commands only.
    ///
    /// # Errors
    ///
    /// - `ParseError::EmptyPathData` if the description is blank
    /// - `ParseError::MissingArgument` if a point-producing command lacks arguments
    /// - `ParseError::InvalidNumber` / `ParseError::NonFiniteNumber` for bad arguments
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if self.data.trim().is_empty() {
            return Err(ParseError::EmptyPathData.into());
        }

        let mut points: Vec<Point2> = Vec::new();
        let mut cursor = Point2::origin();

        for (letter, args) in tokenize(self.data) {
            let Some(command) = PathCommand::from_letter(letter) else {
                continue;
            };
            match command {
                PathCommand::MoveTo | PathCommand::LineTo => {
                    let [x, y] = read_args::<2>(letter, args)?;
                    cursor = Point2::new(x, y);
                    points.push(cursor);
                }
                PathCommand::HorizontalTo => {
                    let [x] = read_args::<1>(letter, args)?;
                    cursor.x = x;
                    points.push(cursor);
                }
                PathCommand::VerticalTo => {
                    let [y] = read_args::<1>(letter, args)?;
                    cursor.y = y;
                    points.push(cursor);
                }
                PathCommand::ClosePath => match points.first() {
                    Some(&first) => points.push(first),
                    None => debug!("close-path before any point, ignored"),
                },
                PathCommand::Curve(kind) => {
                    debug!(?kind, "curve command ignored");
                }
            }
        }

        debug!(points = points.len(), "parsed path data");
        Ok(points)
    }
}

/// Splits `data` into `(command letter, argument text)` pairs. Text before
/// the first command letter is dropped.
fn tokenize(data: &str) -> Vec<(char, &str)> {
    let mut tokens = Vec::new();
    let mut current: Option<(char, usize)> = None;

    for (idx, c) in data.char_indices() {
        if PathCommand::from_letter(c).is_none() {
            continue;
        }
        if let Some((letter, start)) = current {
            tokens.push((letter, &data[start..idx]));
        }
        current = Some((c, idx + c.len_utf8()));
    }
    if let Some((letter, start)) = current {
        tokens.push((letter, &data[start..]));
    }

    tokens
}

/// Reads the first `N` numeric arguments of a command. Arguments are
/// separated by whitespace and/or commas; any beyond `N` are ignored.
fn read_args<const N: usize>(command: char, args: &str) -> Result<[f64; N]> {
    let mut values = [0.0; N];
    let mut found = 0;

    for token in args
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .take(N)
    {
        let value: f64 = token.parse().map_err(|_| ParseError::InvalidNumber {
            command,
            token: token.to_owned(),
        })?;
        if !value.is_finite() {
            return Err(ParseError::NonFiniteNumber {
                command,
                token: token.to_owned(),
            }
            .into());
        }
        values[found] = value;
        found += 1;
    }

    if found < N {
        return Err(ParseError::MissingArgument {
            command,
            expected: N,
            found,
        }
        .into());
    }
    Ok(values)
}
