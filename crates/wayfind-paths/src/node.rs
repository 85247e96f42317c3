use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of a graph node.
///
/// Tokens that parse as integers become [`NodeId::Num`], everything else
/// [`NodeId::Name`]. The derived ordering sorts numeric ids numerically and
/// before any named id, which keeps `"9" < "10"` for integer inputs.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NodeId {
    Num(i64),
    Name(String),
}

impl NodeId {
    /// Parse a single token. Surrounding whitespace is ignored.
    pub fn parse(token: &str) -> Self {
        let t = token.trim();
        match t.parse::<i64>() {
            Ok(n) => NodeId::Num(n),
            Err(_) => NodeId::Name(t.to_string()),
        }
    }
}

impl FromStr for NodeId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NodeId::parse(s))
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Num(n)
    }
}

impl From<i32> for NodeId {
    fn from(n: i32) -> Self {
        NodeId::Num(n.into())
    }
}

impl From<usize> for NodeId {
    fn from(n: usize) -> Self {
        NodeId::Num(n as i64)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::parse(s)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::parse(&s)
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Num(n) => write!(f, "{n}"),
            NodeId::Name(s) => f.write_str(s),
        }
    }
}
