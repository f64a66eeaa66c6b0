use std::path::{Path, PathBuf};

/// Where query lines come from: the command line itself, or a file named by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    Args(String),
    File(PathBuf),
}

impl QuerySource {
    /// `None` when there is nothing to query.
    pub fn detect(args: &[String]) -> Option<Self> {
        let joined = args.join(" ");
        if joined.trim().is_empty() {
            return None;
        }

        if Path::new(&joined).is_file() {
            Some(Self::File(PathBuf::from(joined)))
        } else {
            Some(Self::Args(joined))
        }
    }

    pub async fn read(&self) -> std::io::Result<Vec<String>> {
        match self {
            Self::Args(line) => Ok(vec![line.clone()]),
            Self::File(path) => {
                let data = tokio::fs::read_to_string(path).await?;
                Ok(data
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_owned)
                    .collect())
            }
        }
    }
}

/// Split a line into `(domain, record type)`. Anything after those is ignored.
pub fn parse_query(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split_whitespace();
    Some((parts.next()?, parts.next()?))
}

/// One or more labels of 1-63 letters, digits or hyphens, then a 2-63 letter
/// top-level label.
pub fn is_valid_domain(domain: &str) -> bool {
    let Some((rest, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let tld_ok = (2..=63).contains(&tld.len()) && tld.bytes().all(|b| b.is_ascii_alphabetic());

    tld_ok
        && rest.split('.').all(|label| {
            (1..=63).contains(&label.len())
                && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        })
}
