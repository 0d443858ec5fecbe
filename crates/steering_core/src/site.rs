/// Fixed conventions of the GitBook site the docs are pulled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteLayout {
    pub base_url: &'static str,
    pub index_url: &'static str,
    pub docs_prefix: &'static str,
}

impl SiteLayout {
    pub const GITBOOK: SiteLayout = SiteLayout {
        base_url: "https://fewangsit.gitbook.io",
        index_url: "https://fewangsit.gitbook.io/vue/llms.txt",
        docs_prefix: "/vue/docs/",
    };
}
