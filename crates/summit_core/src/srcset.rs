/// One entry of a responsive image `srcset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrcsetCandidate<'a> {
    pub url: &'a str,
    /// Declared `w` descriptor, if the candidate has a parseable one.
    pub width: Option<u32>,
}

/// Split a `srcset` attribute into candidates, in attribute order.
pub fn parse_candidates(srcset: &str) -> Vec<SrcsetCandidate<'_>> {
    srcset
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split_whitespace();
            let url = parts.next()?;
            let width = parts.find_map(parse_width);
            Some(SrcsetCandidate { url, width })
        })
        .collect()
}

/// Pick the candidate with the largest declared width.
///
/// Widths compare numerically. Candidates without a `w` descriptor are not
/// eligible; on equal widths the earlier candidate is kept.
pub fn select_largest_candidate(srcset: &str) -> Option<&str> {
    parse_candidates(srcset)
        .into_iter()
        .filter_map(|c| c.width.map(|w| (w, c.url)))
        .fold(None, |best: Option<(u32, &str)>, (width, url)| match best {
            Some((best_width, _)) if best_width >= width => best,
            _ => Some((width, url)),
        })
        .map(|(_, url)| url)
}

fn parse_width(descriptor: &str) -> Option<u32> {
    descriptor
        .strip_suffix('w')
        .or_else(|| descriptor.strip_suffix('W'))
        .and_then(|digits| digits.parse().ok())
}
