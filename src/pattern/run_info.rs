use crate::cards::Rank;

/// A run of consecutive chainable ranks: its lowest rank and how many links it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunInfo {
    pub lowest: Rank,
    pub links: usize,
}

impl RunInfo {
    /// Detect a run in ascending `ranks` where every link is `width` equal ranks
    /// (1 for a straight, 2 for a pair-straight, 3 for a triple-straight).
    pub fn detect(ranks: &[Rank], width: usize) -> Option<Self> {
        if width == 0 || ranks.is_empty() || ranks.len() % width != 0 {
            return None;
        }
        let mut links = Vec::with_capacity(ranks.len() / width);
        for chunk in ranks.chunks(width) {
            let head = chunk[0];
            if chunk.iter().any(|&r| r != head) {
                return None;
            }
            links.push(head);
        }
        Self::from_links(&links)
    }

    /// Check that ascending, distinct `links` are chainable and each is exactly one
    /// rank above the previous.
    pub fn from_links(links: &[Rank]) -> Option<Self> {
        let (&lowest, _) = links.split_first()?;
        let chained = links.iter().all(|r| r.is_chainable())
            && links.windows(2).all(|w| w[0].next() == Some(w[1]));
        chained.then_some(RunInfo { lowest, links: links.len() })
    }
}
