/// Levenshtein edit distance between two strings, counted in characters.
///
/// Insertions, deletions and substitutions all cost 1. Adjacent
/// transpositions are not discounted. Inputs are compared as given; callers
/// normalize them first.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    DistanceScratch::default().distance(&a, &b)
}

/// Reusable row buffers for repeated distance computations.
///
/// The table is kept as two rows sized by the shorter input, so a scan over
/// a catalog allocates once per scratch instead of once per comparison.
#[derive(Debug, Default)]
pub struct DistanceScratch {
    prev: Vec<usize>,
    curr: Vec<usize>,
}

impl DistanceScratch {
    pub fn distance(&mut self, a: &[char], b: &[char]) -> usize {
        // rows follow the shorter string
        let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

        if short.is_empty() {
            return long.len();
        }

        self.prev.clear();
        self.prev.extend(0..=short.len());
        self.curr.clear();
        self.curr.resize(short.len() + 1, 0);

        for (i, lc) in long.iter().enumerate() {
            self.curr[0] = i + 1;
            for (j, sc) in short.iter().enumerate() {
                let cost = usize::from(lc != sc);
                self.curr[j + 1] = (self.prev[j + 1] + 1)
                    .min(self.curr[j] + 1)
                    .min(self.prev[j] + cost);
            }
            std::mem::swap(&mut self.prev, &mut self.curr);
        }

        self.prev[short.len()]
    }
}
