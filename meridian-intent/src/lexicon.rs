/// A named keyword list. Lexicons are consulted in registration order;
/// when two lexicons tie on match count, the earlier-registered one wins.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Lexicon {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    /// Number of keywords contained in the query as substrings.
    pub fn match_count(&self, query: &str) -> usize {
        self.keywords.iter().filter(|k| query.contains(k.as_str())).count()
    }
}

/// Pick the lexicon with the most keyword hits, if any hit at all.
/// Strict comparison so the first-registered lexicon wins ties.
pub fn best_match<'a>(lexicons: &'a [Lexicon], query: &str) -> Option<&'a Lexicon> {
    let mut best: Option<(&Lexicon, usize)> = None;
    for lexicon in lexicons {
        let count = lexicon.match_count(query);
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((lexicon, count)),
        }
    }
    best.map(|(lexicon, _)| lexicon)
}
