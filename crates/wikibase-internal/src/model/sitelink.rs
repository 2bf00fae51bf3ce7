//! Site links: links from site identifiers to page titles.

/// A link from one site (e.g. a wiki) to a page title on it.
///
/// The legacy serialization carries no badges, so none are modeled here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLink {
    pub site: String,
    pub title: String,
}

impl SiteLink {
    pub fn new(site: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            title: title.into(),
        }
    }
}

/// An ordered collection of site links, at most one per site.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteLinkList {
    links: Vec<SiteLink>,
}

impl SiteLinkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a link, replacing any existing link for the same site
    /// in place.
    pub fn insert(&mut self, link: SiteLink) {
        match self.links.iter_mut().find(|l| l.site == link.site) {
            Some(existing) => *existing = link,
            None => self.links.push(link),
        }
    }

    /// Looks up the link for a site key.
    pub fn get(&self, site: &str) -> Option<&SiteLink> {
        self.links.iter().find(|l| l.site == site)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SiteLink> {
        self.links.iter()
    }
}

impl FromIterator<SiteLink> for SiteLinkList {
    fn from_iter<I: IntoIterator<Item = SiteLink>>(iter: I) -> Self {
        let mut list = SiteLinkList::new();
        for link in iter {
            list.insert(link);
        }
        list
    }
}
