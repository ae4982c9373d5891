use clap::Parser;
use url::Url;
use xkcd_core::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};

#[derive(Parser, Debug)]
#[clap(about, author, version)]
pub struct Args {
    /// Lists the most recent xkcd comics
    #[clap(short, long)]
    pub list: bool,
    /// The xkcd comic number to fetch, 0 fetches the latest one
    #[clap(short, long, default_value = "0")]
    pub num: i64,
    /// How many comics are listed (lower is faster)
    #[clap(short, long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,
    /// Fail when any comic of the list couldn't be fetched, instead of marking it unavailable
    #[clap(long, action)]
    pub strict: bool,
    /// Origin of the xkcd json api
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clap_test() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_fetch_the_latest_comic() {
        let args = Args::try_parse_from(["xkcd"]).unwrap();
        assert!(!args.list);
        assert_eq!(args.num, 0);
        assert_eq!(args.page_size, 20);
        assert!(!args.strict);
        assert_eq!(args.base_url.as_str(), "https://xkcd.com/");
    }

    #[test]
    fn list_mode_flags() {
        let args = Args::try_parse_from(["xkcd", "-l", "-p", "5", "--strict"]).unwrap();
        assert!(args.list);
        assert_eq!(args.page_size, 5);
        assert!(args.strict);
    }

    #[test]
    fn numbered_comic() {
        let args = Args::try_parse_from(["xkcd", "-n", "614"]).unwrap();
        assert_eq!(args.num, 614);
    }

    #[test]
    fn empty_page_is_rejected() {
        assert!(Args::try_parse_from(["xkcd", "-l", "-p", "0"]).is_err());
    }

    #[test]
    fn custom_origin() {
        let args = Args::try_parse_from(["xkcd", "--base-url", "http://localhost:8080"]).unwrap();
        assert_eq!(args.base_url.as_str(), "http://localhost:8080/");
    }
}
