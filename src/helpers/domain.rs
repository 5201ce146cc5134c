use tracing::trace;
use url::{Host, Url};

const DEFAULT_SCHEME: &str = "http://";
const SCHEME_SEPARATOR: &str = "://";

pub struct DomainParser;
impl DomainParser {
    /// Get the registrable domain of a raw, possibly scheme-less, URL string.
    ///
    /// IP literals and `localhost` are returned as-is, and hosts without a
    /// registrable part (e.g. `bitwarden`) fall back to the full hostname.
    /// Anything that can't be parsed yields `None`.
    #[must_use]
    pub fn get_domain(input: Option<&str>) -> Option<String> {
        let url = Self::normalize(input?)?;

        let domain = match url.host()? {
            Host::Ipv4(ip) => ip.to_string(),
            Host::Ipv6(ip) => ip.to_string(),
            Host::Domain(name) => {
                let name = name.strip_suffix('.').unwrap_or(name);
                if name.is_empty() {
                    return None;
                }

                if name == "localhost" {
                    name.to_string()
                } else {
                    registrable_root(name).unwrap_or(name).to_string()
                }
            }
        };

        trace!(?input, %domain, "Resolved domain");

        Some(domain)
    }

    /// Same normalization as [`Self::get_domain`], but returns the full
    /// hostname without reducing it to the registrable part.
    #[must_use]
    pub fn get_host_name(input: Option<&str>) -> Option<String> {
        let url = Self::normalize(input?)?;

        match url.host()? {
            Host::Ipv4(ip) => Some(ip.to_string()),
            Host::Ipv6(ip) => Some(ip.to_string()),
            Host::Domain(name) => Some(name.to_string()),
        }
    }

    #[must_use]
    pub fn parse_domain_name(url: &Url) -> Option<addr::domain::Name<'_>> {
        url.domain().and_then(|x| addr::parse_domain_name(x).ok())
    }

    /// Get the root domain (the registrable part)
    #[must_use]
    pub fn get_domain_root(url: &Url) -> Option<&str> {
        Self::parse_domain_name(url).and_then(|x| x.root())
    }

    fn normalize(input: &str) -> Option<Url> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        // Whatever the scheme was, the authority gets parsed under http so
        // the host comes out the same way for every scheme.
        let authority = match input.split_once(SCHEME_SEPARATOR) {
            // file URLs keep their host before the third slash, usually empty
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("file") && rest.starts_with('/') => {
                ""
            }
            Some((scheme, rest)) if is_scheme(scheme) => rest,
            _ => input,
        };

        if authority.is_empty() {
            trace!(input, "URL has no authority");
            return None;
        }

        match Url::parse(&format!("{DEFAULT_SCHEME}{authority}")) {
            Ok(u) => Some(u),
            Err(e) => {
                trace!(?e, input, "Could not parse URL");
                None
            }
        }
    }
}

fn registrable_root(name: &str) -> Option<&str> {
    match addr::parse_domain_name(name) {
        Ok(parsed) => parsed.root(),
        Err(e) => {
            // addr rejects underscores and overlong labels, the suffix list
            // lookup alone does not
            trace!(?e, name, "Falling back to plain suffix lookup");
            psl::domain_str(name)
        }
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();

    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
