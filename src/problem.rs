//! Input/output observations of the unknown function

use std::fmt;

/// One observation: ordered inputs `(x, y)` and the expected output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoPair {
    pub x: u64,
    pub y: u64,
    pub ans: u64,
}

impl IoPair {
    pub fn new(x: u64, y: u64, ans: u64) -> Self {
        Self { x, y, ans }
    }
}

impl fmt::Display for IoPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) -> {}", self.x, self.y, self.ans)
    }
}

/// The five built-in observations of the unknown function
pub fn builtin_pairs() -> Vec<IoPair> {
    vec![
        IoPair::new(3, 5, 40),
        IoPair::new(6, 9, 576),
        IoPair::new(23, 44, 369098752),
        IoPair::new(16, 22, 1441792),
        IoPair::new(8, 9, 2304),
    ]
}

/// Parse a pair spec of the form `x,y=ans`
///
/// Values are decimal or `0x`-prefixed hex.
pub fn parse_pair_spec(spec: &str) -> Result<IoPair, String> {
    let (inputs, ans) = spec
        .split_once('=')
        .ok_or_else(|| format!("Invalid pair '{}': expected x,y=ans", spec))?;
    let (x, y) = inputs
        .split_once(',')
        .ok_or_else(|| format!("Invalid pair '{}': expected x,y=ans", spec))?;

    Ok(IoPair::new(
        parse_value(x.trim())?,
        parse_value(y.trim())?,
        parse_value(ans.trim())?,
    ))
}

fn parse_value(s: &str) -> Result<u64, String> {
    if let Some(hex_str) = s.strip_prefix("0x") {
        u64::from_str_radix(hex_str, 16)
    } else {
        s.parse::<u64>()
    }
    .map_err(|_| format!("Invalid number: '{}'", s))
}
