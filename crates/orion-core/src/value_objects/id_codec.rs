//! IdCodec - reversible, salted obfuscation of numeric ids
//!
//! Implements the Hashids scheme (default alphabet and separators) so that
//! ids encoded by other Hashids implementations with the same salt decode here.
//! This is an obfuscation layer for URLs and file names, not encryption.

use std::fmt;

const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";
const DEFAULT_SEPARATORS: &str = "cfhistuCFHISTU";
const SEPARATOR_RATIO: f64 = 3.5;
const GUARD_DIVISOR: usize = 12;

/// Minimum length of encoded ids unless configured otherwise
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Salted id encoder/decoder
#[derive(Clone)]
pub struct IdCodec {
    salt: Vec<char>,
    min_length: usize,
    alphabet: Vec<char>,
    separators: Vec<char>,
    guards: Vec<char>,
}

impl IdCodec {
    /// Create a codec with the default minimum length
    pub fn new(salt: &str) -> Self {
        Self::with_min_length(salt, DEFAULT_MIN_LENGTH)
    }

    /// Create a codec with an explicit minimum length
    pub fn with_min_length(salt: &str, min_length: usize) -> Self {
        let salt: Vec<char> = salt.chars().collect();

        let mut alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        let mut separators: Vec<char> = DEFAULT_SEPARATORS
            .chars()
            .filter(|c| alphabet.contains(c))
            .collect();
        alphabet.retain(|c| !separators.contains(c));
        consistent_shuffle(&mut separators, &salt);

        if separators.is_empty()
            || (alphabet.len() as f64 / separators.len() as f64) > SEPARATOR_RATIO
        {
            let mut target = (alphabet.len() as f64 / SEPARATOR_RATIO).ceil() as usize;
            if target == 1 {
                target += 1;
            }
            if target > separators.len() {
                let missing = target - separators.len();
                separators.extend(alphabet.drain(..missing));
            } else {
                separators.truncate(target);
            }
        }

        consistent_shuffle(&mut alphabet, &salt);

        let guard_count = alphabet.len().div_ceil(GUARD_DIVISOR);
        let guards: Vec<char> = if alphabet.len() < 3 {
            separators.drain(..guard_count).collect()
        } else {
            alphabet.drain(..guard_count).collect()
        };

        Self {
            salt,
            min_length,
            alphabet,
            separators,
            guards,
        }
    }

    /// Encode a single number
    pub fn encode(&self, number: u64) -> String {
        self.encode_many(&[number])
    }

    /// Encode an entity id; negative ids encode as an empty string
    pub fn encode_id(&self, id: i32) -> String {
        u64::try_from(id)
            .map(|n| self.encode(n))
            .unwrap_or_default()
    }

    /// Decode a single number, rejecting anything that is not a canonical encoding
    pub fn decode(&self, hash: &str) -> Option<u64> {
        match self.decode_many(hash)?.as_slice() {
            [number] => Some(*number),
            _ => None,
        }
    }

    /// Decode an entity id
    pub fn decode_id(&self, hash: &str) -> Option<i32> {
        self.decode(hash).and_then(|n| i32::try_from(n).ok())
    }

    /// Encode a list of numbers into one string
    pub fn encode_many(&self, numbers: &[u64]) -> String {
        if numbers.is_empty() {
            return String::new();
        }

        let mut alphabet = self.alphabet.clone();
        let alphabet_len = alphabet.len() as u64;

        let hash_value: u64 = numbers
            .iter()
            .enumerate()
            .map(|(i, n)| n % (i as u64 + 100))
            .sum();

        let lottery = alphabet[(hash_value % alphabet_len) as usize];
        let mut result = vec![lottery];

        for (i, &number) in numbers.iter().enumerate() {
            let buffer = self.lottery_buffer(lottery, &alphabet);
            consistent_shuffle(&mut alphabet, &buffer);
            let last = hash(number, &alphabet);
            let first = u64::from(u32::from(last[0]));
            result.extend_from_slice(&last);

            if i + 1 < numbers.len() {
                let n = number % (first + i as u64);
                result.push(self.separators[(n % self.separators.len() as u64) as usize]);
            }
        }

        if result.len() < self.min_length {
            let guards_len = self.guards.len() as u64;
            let index = (hash_value + u64::from(u32::from(result[0]))) % guards_len;
            result.insert(0, self.guards[index as usize]);

            if result.len() < self.min_length {
                let index = (hash_value + u64::from(u32::from(result[2]))) % guards_len;
                result.push(self.guards[index as usize]);
            }
        }

        let half = alphabet.len() / 2;
        while result.len() < self.min_length {
            let key = alphabet.clone();
            consistent_shuffle(&mut alphabet, &key);

            let mut padded = alphabet[half..].to_vec();
            padded.extend_from_slice(&result);
            padded.extend_from_slice(&alphabet[..half]);
            result = padded;

            let excess = result.len().saturating_sub(self.min_length);
            if excess > 0 {
                let start = excess / 2;
                result = result[start..start + self.min_length].to_vec();
            }
        }

        result.into_iter().collect()
    }

    /// Decode a string produced by [`IdCodec::encode_many`]
    pub fn decode_many(&self, hash: &str) -> Option<Vec<u64>> {
        if hash.is_empty() {
            return None;
        }

        let chars: Vec<char> = hash.chars().collect();
        let parts: Vec<&[char]> = chars.split(|c| self.guards.contains(c)).collect();
        let core = if parts.len() == 2 || parts.len() == 3 {
            parts[1]
        } else {
            parts[0]
        };

        let (&lottery, rest) = core.split_first()?;
        let mut alphabet = self.alphabet.clone();
        let mut numbers = Vec::new();

        for chunk in rest.split(|c| self.separators.contains(c)) {
            let buffer = self.lottery_buffer(lottery, &alphabet);
            consistent_shuffle(&mut alphabet, &buffer);
            numbers.push(unhash(chunk, &alphabet)?);
        }

        // Only canonical encodings are accepted
        if self.encode_many(&numbers) != hash {
            return None;
        }

        Some(numbers)
    }

    fn lottery_buffer(&self, lottery: char, alphabet: &[char]) -> Vec<char> {
        std::iter::once(lottery)
            .chain(self.salt.iter().copied())
            .chain(alphabet.iter().copied())
            .take(alphabet.len())
            .collect()
    }
}

impl fmt::Debug for IdCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdCodec")
            .field("min_length", &self.min_length)
            .finish_non_exhaustive()
    }
}

fn consistent_shuffle(chars: &mut [char], salt: &[char]) {
    if salt.is_empty() {
        return;
    }

    let mut v = 0usize;
    let mut p = 0usize;
    for i in (1..chars.len()).rev() {
        v %= salt.len();
        let n = u32::from(salt[v]) as usize;
        p += n;
        let j = (n + v + p) % i;
        chars.swap(i, j);
        v += 1;
    }
}

fn hash(mut number: u64, alphabet: &[char]) -> Vec<char> {
    let len = alphabet.len() as u64;
    let mut out = Vec::new();
    loop {
        out.push(alphabet[(number % len) as usize]);
        number /= len;
        if number == 0 {
            break;
        }
    }
    out.reverse();
    out
}

fn unhash(chars: &[char], alphabet: &[char]) -> Option<u64> {
    let len = alphabet.len() as u64;
    chars.iter().try_fold(0u64, |acc, c| {
        let position = alphabet.iter().position(|a| a == c)? as u64;
        acc.checked_mul(len)?.checked_add(position)
    })
}
