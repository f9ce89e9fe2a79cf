use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "List the routes bound to a Cloud Foundry application", long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.staging)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,

    /// GUID of the application whose routes are listed
    #[arg(short, long)]
    pub app_guid: Option<String>,

    /// Only return routes with this host name
    #[arg(long)]
    pub hostname: Option<String>,

    /// Only return routes in this domain (ignored when --hostname is given)
    #[arg(short, long)]
    pub domain_guid: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["cf-routes"]);
        assert_eq!(args.env_file, ".env");
        assert!(args.app_guid.is_none());
        assert!(args.hostname.is_none());
        assert!(args.domain_guid.is_none());
    }

    #[test]
    fn test_lookup_flags() {
        let args = Args::parse_from([
            "cf-routes",
            "--app-guid",
            "a1",
            "--hostname",
            "foo.example.com",
            "-d",
            "d1",
        ]);
        assert_eq!(args.app_guid.as_deref(), Some("a1"));
        assert_eq!(args.hostname.as_deref(), Some("foo.example.com"));
        assert_eq!(args.domain_guid.as_deref(), Some("d1"));
    }
}
