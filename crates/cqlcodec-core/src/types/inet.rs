use std::{
    fmt::{self, Display},
    net::{AddrParseError, IpAddr},
};

/// Parse a literal IPv4 or IPv6 address. Hostnames are never resolved.
pub fn parse_inet(s: &str) -> Result<IpAddr, AddrParseError> {
    s.parse()
}

///
/// InetText
///
/// Canonical rendering: dotted quad for IPv4, eight lower-case hex groups
/// without zero compression for IPv6.
///

#[derive(Clone, Copy, Debug)]
pub struct InetText<'a>(pub &'a IpAddr);

impl Display for InetText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            IpAddr::V4(addr) => addr.fmt(f),
            IpAddr::V6(addr) => {
                for (i, segment) in addr.segments().iter().enumerate() {
                    if i > 0 {
                        f.write_str(":")?;
                    }
                    write!(f, "{segment:x}")?;
                }
                Ok(())
            }
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(s: &str) -> String {
        InetText(&parse_inet(s).unwrap()).to_string()
    }

    #[test]
    fn ipv4_is_dotted_quad() {
        assert_eq!(canonical("127.0.0.1"), "127.0.0.1");
        assert_eq!(canonical("255.255.255.255"), "255.255.255.255");
    }

    #[test]
    fn ipv6_is_expanded_and_lower_case() {
        assert_eq!(canonical("::1"), "0:0:0:0:0:0:0:1");
        assert_eq!(canonical("2001:DB8::FF00:42:8329"), "2001:db8:0:0:0:ff00:42:8329");
        assert_eq!(canonical("::ffff:1.2.3.4"), "0:0:0:0:0:ffff:102:304");
    }

    #[test]
    fn family_is_preserved() {
        assert!(parse_inet("::ffff:1.2.3.4").unwrap().is_ipv6());
        assert!(parse_inet("1.2.3.4").unwrap().is_ipv4());
    }

    #[test]
    fn hostnames_and_garbage_are_rejected() {
        for s in ["localhost", "example.com", "1.2.3", "1.2.3.256", "::g", "", " 1.2.3.4"] {
            assert!(parse_inet(s).is_err(), "{s:?} should not parse");
        }
    }
}
