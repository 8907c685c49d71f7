//! The four output categories and their accumulate-then-freeze containers.

use std::collections::HashSet;
use std::fmt;

use super::ClassifyStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ips,
    Urls,
    PiholeDomains,
    AdblockRules,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ips,
        Category::Urls,
        Category::PiholeDomains,
        Category::AdblockRules,
    ];

    /// Output file name inside the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Category::Ips => "ips.txt",
            Category::Urls => "urls.txt",
            Category::PiholeDomains => "urls_pihole.txt",
            Category::AdblockRules => "urls_UBL.txt",
        }
    }

    /// Human-readable list title used in the file header.
    pub fn title(self) -> &'static str {
        match self {
            Category::Ips => "USOM Malicious IP List",
            Category::Urls => "USOM Malicious URL List",
            Category::PiholeDomains => "USOM Malicious Domain List (Pi-hole Format)",
            Category::AdblockRules => "USOM Malicious Domain List (Adblock/uBlock Format)",
        }
    }

    /// What one entry is called in the header's count line.
    pub fn noun(self) -> &'static str {
        match self {
            Category::Ips => "IP",
            Category::Urls => "URL",
            Category::PiholeDomains => "Domain",
            Category::AdblockRules => "Rule",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Ips => "ips",
            Category::Urls => "urls",
            Category::PiholeDomains => "domains_pihole",
            Category::AdblockRules => "domains_adblock",
        };
        f.write_str(name)
    }
}

/// Sets being filled by the classifier. Only ever grows; turned into
/// [`Categories`] by [`CategorySets::freeze`].
#[derive(Debug, Default)]
pub struct CategorySets {
    ips: HashSet<String>,
    urls: HashSet<String>,
    pihole_domains: HashSet<String>,
    adblock_rules: HashSet<String>,
    pub(super) stats: ClassifyStats,
}

impl CategorySets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &HashSet<String> {
        match category {
            Category::Ips => &self.ips,
            Category::Urls => &self.urls,
            Category::PiholeDomains => &self.pihole_domains,
            Category::AdblockRules => &self.adblock_rules,
        }
    }

    /// Returns false when the value was already present.
    pub(super) fn insert(&mut self, category: Category, value: String) -> bool {
        let set = match category {
            Category::Ips => &mut self.ips,
            Category::Urls => &mut self.urls,
            Category::PiholeDomains => &mut self.pihole_domains,
            Category::AdblockRules => &mut self.adblock_rules,
        };
        set.insert(value)
    }

    pub fn stats(&self) -> &ClassifyStats {
        &self.stats
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// Sort every set ascending. The result is read-only.
    pub fn freeze(self) -> Categories {
        fn sorted(set: HashSet<String>) -> Vec<String> {
            let mut v: Vec<String> = set.into_iter().collect();
            v.sort_unstable();
            v
        }
        Categories {
            ips: sorted(self.ips),
            urls: sorted(self.urls),
            pihole_domains: sorted(self.pihole_domains),
            adblock_rules: sorted(self.adblock_rules),
            stats: self.stats,
        }
    }
}

/// Frozen, lexicographically sorted output of one classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    ips: Vec<String>,
    urls: Vec<String>,
    pihole_domains: Vec<String>,
    adblock_rules: Vec<String>,
    stats: ClassifyStats,
}

impl Categories {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Ips => &self.ips,
            Category::Urls => &self.urls,
            Category::PiholeDomains => &self.pihole_domains,
            Category::AdblockRules => &self.adblock_rules,
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.get(category).len()
    }

    pub fn stats(&self) -> &ClassifyStats {
        &self.stats
    }

    /// Per-category entry counts in [`Category::ALL`] order.
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::ALL.iter().map(|c| (*c, self.len(*c))).collect()
    }
}
