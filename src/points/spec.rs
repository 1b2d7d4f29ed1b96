//! Parser for rbox-style point specifications such as `"100 s t42"`.
//!
//! Options may be separated by whitespace or written back to back
//! (`"100sD3"`). A bare number is the point count.

const DEFAULT_BOX: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PointSpecError {
    #[error("unknown option '{option}' at position {position} in point spec")]
    UnknownOption { option: char, position: usize },
    #[error("invalid number '{text}' for option '{option}'")]
    InvalidNumber { option: char, text: String },
    #[error("only 3-dimensional points are supported, got D{0}")]
    UnsupportedDimension(u32),
    #[error("box size must be positive and finite, got {0}")]
    InvalidBox(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distribution {
    /// Uniform inside the cube `[-B, B)^3`.
    Cube,
    /// Uniform on the sphere of radius `B`.
    Sphere,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seed {
    /// Derived from the spec text, so equal specs give equal clouds.
    FromSpec(u64),
    Fixed(u64),
    Time,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointSpec {
    pub count: usize,
    pub distribution: Distribution,
    pub box_size: f64,
    pub cube_corners: bool,
    pub diamond: bool,
    pub seed: Seed,
}

impl PointSpec {
    pub fn parse(text: &str) -> Result<Self, PointSpecError> {
        let mut spec = PointSpec {
            count: 0,
            distribution: Distribution::Cube,
            box_size: DEFAULT_BOX,
            cube_corners: false,
            diamond: false,
            seed: Seed::FromSpec(fnv1a(text.as_bytes())),
        };

        let chars: Vec<char> = text.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            if c.is_ascii_digit() {
                let (arg, next) = take_number(&chars, i);
                spec.count = parse_arg('#', &arg)?;
                i = next;
                continue;
            }

            let (arg, next) = take_number(&chars, i + 1);
            match c {
                'D' => {
                    let dim: u32 = parse_arg(c, &arg)?;
                    if dim != 3 {
                        return Err(PointSpecError::UnsupportedDimension(dim));
                    }
                }
                's' => spec.distribution = Distribution::Sphere,
                'c' => spec.cube_corners = true,
                'd' => spec.diamond = true,
                'B' => {
                    let size: f64 = parse_arg(c, &arg)?;
                    if !size.is_finite() || size <= 0.0 {
                        return Err(PointSpecError::InvalidBox(size));
                    }
                    spec.box_size = size;
                }
                't' => {
                    spec.seed = if arg.is_empty() {
                        Seed::Time
                    } else {
                        Seed::Fixed(parse_arg(c, &arg)?)
                    };
                }
                _ => {
                    return Err(PointSpecError::UnknownOption {
                        option: c,
                        position: i,
                    });
                }
            }

            // flags without an argument must not swallow a following count
            if matches!(c, 's' | 'c' | 'd') {
                i += 1;
            } else {
                i = next;
            }
        }

        Ok(spec)
    }
}

/// Collects the numeric text starting at `start`; returns it and the index
/// just past it.
fn take_number(chars: &[char], start: usize) -> (String, usize) {
    let mut end = start;
    while end < chars.len() {
        let c = chars[end];
        let sign = (c == '-' || c == '+') && end == start;
        if c.is_ascii_digit() || c == '.' || sign {
            end += 1;
        } else {
            break;
        }
    }
    (chars[start..end].iter().collect(), end)
}

fn parse_arg<T: std::str::FromStr>(option: char, text: &str) -> Result<T, PointSpecError> {
    text.parse().map_err(|_| PointSpecError::InvalidNumber {
        option,
        text: text.to_string(),
    })
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_count() {
        let spec = PointSpec::parse("30").unwrap();
        assert_eq!(spec.count, 30);
        assert_eq!(spec.distribution, Distribution::Cube);
        assert_eq!(spec.box_size, 0.5);
        assert!(!spec.cube_corners);
        assert!(matches!(spec.seed, Seed::FromSpec(_)));
    }

    #[test]
    fn options_with_and_without_spaces() {
        let spaced = PointSpec::parse("100 s D3 t42 B2").unwrap();
        let packed = PointSpec::parse("100sD3t42B2").unwrap();

        for spec in [spaced, packed] {
            assert_eq!(spec.count, 100);
            assert_eq!(spec.distribution, Distribution::Sphere);
            assert_eq!(spec.seed, Seed::Fixed(42));
            assert_eq!(spec.box_size, 2.0);
        }
    }

    #[test]
    fn flag_followed_by_count() {
        let spec = PointSpec::parse("c20").unwrap();
        assert!(spec.cube_corners);
        assert_eq!(spec.count, 20);
    }

    #[test]
    fn corners_and_diamond() {
        let spec = PointSpec::parse("c d").unwrap();
        assert_eq!(spec.count, 0);
        assert!(spec.cube_corners);
        assert!(spec.diamond);
    }

    #[test]
    fn bare_t_uses_time_seed() {
        assert_eq!(PointSpec::parse("10 t").unwrap().seed, Seed::Time);
    }

    #[test]
    fn seed_from_spec_is_stable() {
        let a = PointSpec::parse("50 s").unwrap();
        let b = PointSpec::parse("50 s").unwrap();
        let c = PointSpec::parse("51 s").unwrap();
        assert_eq!(a.seed, b.seed);
        assert_ne!(a.seed, c.seed);
    }

    #[test]
    fn rejects_other_dimensions() {
        assert_eq!(
            PointSpec::parse("10 D2"),
            Err(PointSpecError::UnsupportedDimension(2))
        );
    }

    #[test]
    fn rejects_unknown_option() {
        assert_eq!(
            PointSpec::parse("10 x"),
            Err(PointSpecError::UnknownOption {
                option: 'x',
                position: 3
            })
        );
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(matches!(
            PointSpec::parse("10 B"),
            Err(PointSpecError::InvalidNumber { option: 'B', .. })
        ));
        assert!(matches!(
            PointSpec::parse("1.5"),
            Err(PointSpecError::InvalidNumber { .. })
        ));
        assert_eq!(
            PointSpec::parse("10 B-1"),
            Err(PointSpecError::InvalidBox(-1.0))
        );
    }
}
