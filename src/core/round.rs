//! A single hangman round
//!
//! Holds the target word, the revealed positions and the guesses made so far.
//! All guess evaluation happens in [`Round::guess`]; rendering and I/O live
//! elsewhere.

use super::Word;

/// Character shown for an unrevealed position
pub const PLACEHOLDER: char = '_';

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

/// Result of evaluating one line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Blank input; nothing counted
    Empty,
    /// Letter or word guessed before; nothing counted
    AlreadyGuessed,
    /// The whole target word was typed
    WholeWordCorrect,
    /// A letter in the word; all its positions are now revealed
    LetterCorrect,
    /// A single character not in the word
    LetterWrong,
    /// A multi-character guess that is not the word
    WordWrong,
    /// The round has already ended
    Finished,
}

/// State of one round, from word pick to win or loss
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    revealed: Vec<bool>,
    correct: Vec<char>,
    wrong: Vec<char>,
    missed_words: Vec<String>,
    total_guesses: usize,
    max_wrong: usize,
    status: RoundStatus,
}

impl Round {
    /// Start a round for `target` allowing `max_wrong` wrong letters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessOutcome, Round, RoundStatus, Word};
    ///
    /// let mut round = Round::new(Word::new("cat").unwrap(), 6);
    /// assert_eq!(round.guess("a"), GuessOutcome::LetterCorrect);
    /// assert_eq!(round.revealed(), "_a_");
    /// assert_eq!(round.guess("cat"), GuessOutcome::WholeWordCorrect);
    /// assert_eq!(round.status(), RoundStatus::Won);
    /// ```
    #[must_use]
    pub fn new(target: Word, max_wrong: usize) -> Self {
        let revealed = vec![false; target.len()];
        Self {
            target,
            revealed,
            correct: Vec::new(),
            wrong: Vec::new(),
            missed_words: Vec::new(),
            total_guesses: 0,
            max_wrong,
            status: RoundStatus::Playing,
        }
    }

    /// Evaluate a raw line of input against the target
    ///
    /// Input is trimmed and lowercased. Repeats and blank lines leave the
    /// round untouched and are not counted.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Finished;
        }

        let answer = input.trim().to_lowercase();
        if answer.is_empty() {
            return GuessOutcome::Empty;
        }

        let mut chars = answer.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(letter), None) => Some(letter),
            _ => None,
        };

        let repeated = match single {
            Some(letter) => self.correct.contains(&letter) || self.wrong.contains(&letter),
            None => self.missed_words.contains(&answer),
        };
        if repeated {
            return GuessOutcome::AlreadyGuessed;
        }

        self.total_guesses += 1;

        if answer == self.target.text() {
            self.revealed.fill(true);
            self.status = RoundStatus::Won;
            return GuessOutcome::WholeWordCorrect;
        }

        let Some(letter) = single else {
            self.missed_words.push(answer);
            return GuessOutcome::WordWrong;
        };

        if self.target.has_letter(letter) {
            self.correct.push(letter);
            for &pos in self.target.positions_of(letter) {
                self.revealed[pos] = true;
            }
            if self.is_solved() {
                self.status = RoundStatus::Won;
            }
            GuessOutcome::LetterCorrect
        } else {
            self.wrong.push(letter);
            if self.wrong.len() >= self.max_wrong {
                self.status = RoundStatus::Lost;
            }
            GuessOutcome::LetterWrong
        }
    }

    /// Revealed pattern, with [`PLACEHOLDER`] for hidden positions
    #[must_use]
    pub fn revealed(&self) -> String {
        self.target
            .chars()
            .iter()
            .zip(&self.revealed)
            .map(|(&ch, &shown)| if shown { ch } else { PLACEHOLDER })
            .collect()
    }

    /// Revealed characters in order, `None` for hidden positions
    pub fn revealed_chars(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.target
            .chars()
            .iter()
            .zip(&self.revealed)
            .map(|(&ch, &shown)| shown.then_some(ch))
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.revealed.iter().all(|&shown| shown)
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, RoundStatus::Playing)
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn correct_guesses(&self) -> &[char] {
        &self.correct
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> &[char] {
        &self.wrong
    }

    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.wrong.len()
    }

    /// Every counted guess: letters and whole-word attempts
    #[must_use]
    pub const fn total_guesses(&self) -> usize {
        self.total_guesses
    }

    #[must_use]
    pub const fn max_wrong_guesses(&self) -> usize {
        self.max_wrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str) -> Round {
        Round::new(Word::new(word).unwrap(), 6)
    }

    #[test]
    fn new_round_is_fully_hidden() {
        let r = round("hangman");
        assert_eq!(r.revealed(), "_______");
        assert_eq!(r.status(), RoundStatus::Playing);
        assert_eq!(r.total_guesses(), 0);
        assert!(r.correct_guesses().is_empty());
        assert!(r.wrong_guesses().is_empty());
    }

    #[test]
    fn cat_scenario() {
        let mut r = round("cat");

        assert_eq!(r.guess("a"), GuessOutcome::LetterCorrect);
        assert_eq!(r.revealed(), "_a_");
        assert_eq!(r.status(), RoundStatus::Playing);

        assert_eq!(r.guess("z"), GuessOutcome::LetterWrong);
        assert_eq!(r.wrong_count(), 1);

        assert_eq!(r.guess("cat"), GuessOutcome::WholeWordCorrect);
        assert_eq!(r.status(), RoundStatus::Won);
        assert_eq!(r.total_guesses(), 3);
        assert_eq!(r.wrong_count(), 1);
        assert_eq!(r.revealed(), "cat");
    }

    #[test]
    fn letter_reveals_every_occurrence() {
        let mut r = round("banana");
        assert_eq!(r.guess("a"), GuessOutcome::LetterCorrect);
        assert_eq!(r.revealed(), "_a_a_a");
        assert_eq!(r.guess("n"), GuessOutcome::LetterCorrect);
        assert_eq!(r.revealed(), "_anana");
    }

    #[test]
    fn revealing_last_letter_wins() {
        let mut r = round("noon");
        r.guess("n");
        assert_eq!(r.status(), RoundStatus::Playing);
        assert_eq!(r.guess("o"), GuessOutcome::LetterCorrect);
        assert_eq!(r.status(), RoundStatus::Won);
        assert!(r.is_solved());
    }

    #[test]
    fn repeated_letter_changes_nothing() {
        let mut r = round("cat");
        r.guess("c");
        r.guess("q");
        let revealed = r.revealed();
        let total = r.total_guesses();

        assert_eq!(r.guess("c"), GuessOutcome::AlreadyGuessed);
        assert_eq!(r.guess("Q"), GuessOutcome::AlreadyGuessed);

        assert_eq!(r.revealed(), revealed);
        assert_eq!(r.total_guesses(), total);
        assert_eq!(r.correct_guesses(), &['c']);
        assert_eq!(r.wrong_guesses(), &['q']);
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let mut r = round("cat");
        assert_eq!(r.guess("  A \n"), GuessOutcome::LetterCorrect);
        assert_eq!(r.guess("CAT"), GuessOutcome::WholeWordCorrect);
    }

    #[test]
    fn blank_input_is_not_counted() {
        let mut r = round("cat");
        assert_eq!(r.guess(""), GuessOutcome::Empty);
        assert_eq!(r.guess("   "), GuessOutcome::Empty);
        assert_eq!(r.total_guesses(), 0);
    }

    #[test]
    fn wrong_word_counts_but_changes_nothing_else() {
        let mut r = round("cat");
        assert_eq!(r.guess("dog"), GuessOutcome::WordWrong);
        assert_eq!(r.total_guesses(), 1);
        assert_eq!(r.wrong_count(), 0);
        assert_eq!(r.revealed(), "___");
        assert_eq!(r.status(), RoundStatus::Playing);

        assert_eq!(r.guess("dog"), GuessOutcome::AlreadyGuessed);
        assert_eq!(r.total_guesses(), 1);
    }

    #[test]
    fn non_letter_single_char_is_wrong() {
        let mut r = round("cat");
        assert_eq!(r.guess("7"), GuessOutcome::LetterWrong);
        assert_eq!(r.wrong_guesses(), &['7']);
    }

    #[test]
    fn six_wrong_letters_lose() {
        let mut r = round("cat");
        r.guess("a");
        for (i, letter) in ["b", "d", "e", "f", "g"].iter().enumerate() {
            assert_eq!(r.guess(letter), GuessOutcome::LetterWrong);
            assert_eq!(r.wrong_count(), i + 1);
            assert_eq!(r.status(), RoundStatus::Playing);
        }
        assert_eq!(r.guess("h"), GuessOutcome::LetterWrong);
        assert_eq!(r.status(), RoundStatus::Lost);
        assert_eq!(r.revealed(), "_a_");
        assert_eq!(r.target().text(), "cat");
    }

    #[test]
    fn wrong_words_never_lose() {
        let mut r = round("cat");
        for word in ["aa", "bb", "cc", "dd", "ee", "ff", "gg"] {
            assert_eq!(r.guess(word), GuessOutcome::WordWrong);
        }
        assert_eq!(r.status(), RoundStatus::Playing);
        assert_eq!(r.total_guesses(), 7);
    }

    #[test]
    fn guesses_after_end_are_ignored() {
        let mut r = round("cat");
        r.guess("cat");
        assert_eq!(r.guess("x"), GuessOutcome::Finished);
        assert_eq!(r.total_guesses(), 1);
        assert_eq!(r.wrong_count(), 0);
    }

    #[test]
    fn revealed_chars_matches_pattern() {
        let mut r = round("cat");
        r.guess("t");
        let chars: Vec<Option<char>> = r.revealed_chars().collect();
        assert_eq!(chars, vec![None, None, Some('t')]);
    }

    #[test]
    fn correct_and_wrong_stay_disjoint() {
        let mut r = round("apple");
        for g in ["p", "x", "p", "x", "a", "z"] {
            r.guess(g);
        }
        assert_eq!(r.correct_guesses(), &['p', 'a']);
        assert_eq!(r.wrong_guesses(), &['x', 'z']);
        assert!(
            r.correct_guesses()
                .iter()
                .all(|c| !r.wrong_guesses().contains(c))
        );
    }
}
