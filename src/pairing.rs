//! Deciding which markers of a line become tags.
//!
//! Each marker kind is paired on its own with a greedy left-to-right scan,
//! then the two pair sets are checked against each other: crossing pairs
//! are dropped on both sides, and a strong pair sitting inside an emphasis
//! pair is dropped while the emphasis survives.

use log::trace;

use crate::token::{MarkerKind, Token};

/// What sits on one side of a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flank {
    /// Start or end of the line.
    Boundary,
    Whitespace,
    Digit,
    /// Any other character, including other markers and backslashes.
    Word,
}

impl Flank {
    fn of(c: Option<char>) -> Self {
        match c {
            None => Flank::Boundary,
            Some(c) if c.is_whitespace() => Flank::Whitespace,
            Some(c) if c.is_numeric() => Flank::Digit,
            Some(_) => Flank::Word,
        }
    }

    fn is_blank(self) -> bool {
        matches!(self, Flank::Boundary | Flank::Whitespace)
    }
}

/// A marker token together with the context the pairing rules look at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the marker in the token sequence.
    pub index: usize,
    pub kind: MarkerKind,
    /// Ordinal of the whitespace-separated word holding the marker.
    pub word: usize,
    pub before: Flank,
    pub after: Flank,
    /// The enclosing word contains a digit somewhere.
    pub in_digit_word: bool,
}

impl Candidate {
    pub fn can_open(&self) -> bool {
        !self.in_digit_word && !self.after.is_blank()
    }

    pub fn can_close(&self) -> bool {
        !self.in_digit_word && !self.before.is_blank()
    }
}

/// Matched opener/closer token indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pair {
    pub open: usize,
    pub close: usize,
    pub kind: MarkerKind,
}

impl Pair {
    /// `other` lies strictly inside `self`.
    pub fn contains(&self, other: &Pair) -> bool {
        self.open < other.open && other.close < self.close
    }

    /// Exactly one end of `other` lies inside `self`, or the other way round.
    pub fn crosses(&self, other: &Pair) -> bool {
        (self.open < other.open && other.open < self.close && self.close < other.close)
            || (other.open < self.open && self.open < other.close && other.close < self.close)
    }
}

struct Word {
    start: usize,
    end: usize,
    has_digit: bool,
}

fn words(line: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Option<Word> = None;
    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            words.extend(current.take());
            continue;
        }
        let word = current.get_or_insert(Word {
            start: i,
            end: i,
            has_digit: false,
        });
        word.end = i + c.len_utf8();
        word.has_digit |= c.is_numeric();
    }
    words.extend(current);
    words
}

/// Annotate every marker of `tokens` with its flanks and enclosing word.
/// Words are computed once per line and walked in step with the tokens.
pub fn candidates(line: &str, tokens: &[Token<'_>]) -> Vec<Candidate> {
    let words = words(line);
    let mut w = 0;
    let mut out = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        let Some(kind) = token.marker_kind() else {
            continue;
        };
        while w + 1 < words.len() && words[w].end <= token.start {
            w += 1;
        }
        debug_assert!(words.get(w).is_some_and(|word| word.start <= token.start));
        out.push(Candidate {
            index,
            kind,
            word: w,
            before: Flank::of(line[..token.start].chars().next_back()),
            after: Flank::of(line[token.end()..].chars().next()),
            in_digit_word: words.get(w).is_some_and(|word| word.has_digit),
        });
    }
    out
}

fn pair_kind(candidates: &[Candidate], kind: MarkerKind) -> Vec<Pair> {
    let mut pairs = Vec::new();
    let mut open: Option<&Candidate> = None;

    for cand in candidates.iter().filter(|c| c.kind == kind) {
        if cand.in_digit_word {
            trace!("{kind:?} marker at token {} sits in a word with digits", cand.index);
            continue;
        }
        if let Some(opener) = open.take() {
            if !cand.can_close() {
                trace!("{kind:?} marker at token {} has whitespace before it", cand.index);
            } else if opener.word != cand.word {
                trace!(
                    "{kind:?} markers at tokens {} and {} are in different words",
                    opener.index,
                    cand.index
                );
            } else if cand.index == opener.index + 1 {
                trace!("{kind:?} pair at token {} is empty", opener.index);
                continue;
            } else {
                pairs.push(Pair {
                    open: opener.index,
                    close: cand.index,
                    kind,
                });
                continue;
            }
        }
        // start over from this marker
        if cand.can_open() {
            open = Some(cand);
        } else {
            trace!("{kind:?} marker at token {} cannot open", cand.index);
        }
    }
    if let Some(opener) = open {
        trace!("{kind:?} marker at token {} is never closed", opener.index);
    }
    pairs
}

fn resolve_overlaps(emphasis: Vec<Pair>, strong: Vec<Pair>) -> Vec<Pair> {
    let mut emphasis_void = vec![false; emphasis.len()];
    let mut strong_void = vec![false; strong.len()];
    for (i, em) in emphasis.iter().enumerate() {
        for (j, st) in strong.iter().enumerate() {
            if em.crosses(st) {
                trace!("emphasis {em:?} crosses strong {st:?}, dropping both");
                emphasis_void[i] = true;
                strong_void[j] = true;
            }
        }
    }

    let emphasis: Vec<Pair> = emphasis
        .into_iter()
        .zip(emphasis_void)
        .filter_map(|(pair, void)| (!void).then_some(pair))
        .collect();

    let mut pairs: Vec<Pair> = strong
        .into_iter()
        .zip(strong_void)
        .filter_map(|(pair, void)| (!void).then_some(pair))
        .filter(|st| match emphasis.iter().find(|em| em.contains(st)) {
            Some(em) => {
                trace!("strong {st:?} inside emphasis {em:?} stays literal");
                false
            }
            None => true,
        })
        .collect();
    pairs.extend(emphasis);
    pairs.sort_by_key(|pair| pair.open);
    pairs
}

/// Compute the final, properly nested set of pairs for one resolved line,
/// ordered by opener position.
pub fn find_pairs(line: &str, tokens: &[Token<'_>]) -> Vec<Pair> {
    let candidates = candidates(line, tokens);
    let emphasis = pair_kind(&candidates, MarkerKind::Emphasis);
    let strong = pair_kind(&candidates, MarkerKind::Strong);
    resolve_overlaps(emphasis, strong)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::resolve;
    use crate::options::Options;
    use crate::scanner::scan;

    fn pairs(line: &str) -> Vec<(usize, usize, MarkerKind)> {
        let tokens = resolve(line, scan(line, Options::default()));
        find_pairs(line, &tokens)
            .into_iter()
            .map(|p| (p.open, p.close, p.kind))
            .collect()
    }

    #[test]
    fn pairs_within_a_word() {
        // a _ b _ c
        assert_eq!(pairs("a_b_c"), vec![(1, 3, MarkerKind::Emphasis)]);
        assert_eq!(pairs("a__b__c"), vec![(1, 3, MarkerKind::Strong)]);
    }

    #[test]
    fn greedy_pairs_restart_after_close() {
        // _ ab _ cd _ e _
        assert_eq!(
            pairs("_ab_cd_e_"),
            vec![(0, 2, MarkerKind::Emphasis), (4, 6, MarkerKind::Emphasis)]
        );
        assert_eq!(pairs("_a_b_"), vec![(0, 2, MarkerKind::Emphasis)]);
    }

    #[test]
    fn emphasis_nests_in_strong() {
        // a __ b _ c _ d __ e
        assert_eq!(
            pairs("a__b_c_d__e"),
            vec![(1, 7, MarkerKind::Strong), (3, 5, MarkerKind::Emphasis)]
        );
    }

    #[test]
    fn strong_inside_emphasis_is_dropped() {
        assert_eq!(pairs("a_b__c__d_e"), vec![(1, 7, MarkerKind::Emphasis)]);
    }

    #[test]
    fn crossing_pairs_are_dropped() {
        assert!(pairs("a_b__c_d__e").is_empty());
        assert!(pairs("a__b_c__d_e").is_empty());
    }

    #[test]
    fn rejections() {
        for line in ["a_b c_d", "_ b_c", "_bc _", "_1_2__3__", "a__b", "a____b", "\\_a\\_"] {
            assert!(pairs(line).is_empty(), "{line:?} should not pair");
        }
    }

    #[test]
    fn word_boundary_restarts_scan() {
        // _ "a " _ b _   => the second word pairs on its own
        assert_eq!(pairs("_a _b_"), vec![(2, 4, MarkerKind::Emphasis)]);
    }

    #[test]
    fn candidates_carry_context() {
        let line = "x _a1_ b__";
        let tokens = resolve(line, scan(line, Options::default()));
        let cands = candidates(line, &tokens);
        assert_eq!(cands.len(), 3);
        assert_eq!(cands[0].before, Flank::Whitespace);
        assert!(cands[0].in_digit_word);
        assert_eq!(cands[1].before, Flank::Digit);
        assert_eq!(cands[2].word, 2);
        assert_eq!(cands[2].after, Flank::Boundary);
        assert!(!cands[2].can_open());
    }

    #[test]
    fn crossing_and_containment() {
        let outer = Pair { open: 0, close: 9, kind: MarkerKind::Strong };
        let inner = Pair { open: 2, close: 4, kind: MarkerKind::Emphasis };
        let crossing = Pair { open: 5, close: 12, kind: MarkerKind::Emphasis };
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.crosses(&crossing));
        assert!(crossing.crosses(&outer));
        assert!(!outer.crosses(&inner));
    }
}
