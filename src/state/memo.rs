//! Memoized computation keyed on its input

/// Caches the last computed value and recomputes only when the key changes
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    cached: Option<(K, V)>,
    computations: usize,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            cached: None,
            computations: 0,
        }
    }

    /// Return the value for `key`, running `compute` only on a cache miss
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        let fresh = matches!(&self.cached, Some((cached_key, _)) if *cached_key == key);
        if !fresh {
            self.cached = None;
        }

        let computations = &mut self.computations;
        let (_, value) = self.cached.get_or_insert_with(|| {
            *computations += 1;
            let value = compute(&key);
            (key, value)
        });
        value
    }

    /// Last computed value, if any
    pub fn value(&self) -> Option<&V> {
        self.cached.as_ref().map(|(_, value)| value)
    }

    /// How many times the computation has actually run
    pub fn computations(&self) -> usize {
        self.computations
    }
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Adds `num` to a running total ten times.
///
/// The total is widened to `i128`, where ten times any `i64` fits exactly.
pub fn expensive_calculation(num: i64) -> i128 {
    tracing::debug!("computing...");
    let mut total: i128 = 0;
    for _ in 0..10 {
        total += i128::from(num);
    }
    total
}

/// Which input of the memo panel receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoField {
    #[default]
    Number,
    Text,
}

impl MemoField {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Number => Self::Text,
            Self::Text => Self::Number,
        }
    }
}

/// State of the memo panel: a number feeding the cached calculation and an
/// unrelated text input that must not trigger recomputation
#[derive(Debug, Clone)]
pub struct MemoExample {
    number: i64,
    text: String,
    pub active_field: MemoField,
    memo: Memo<i64, i128>,
}

impl MemoExample {
    pub fn new() -> Self {
        let mut example = Self {
            number: 0,
            text: String::new(),
            active_field: MemoField::default(),
            memo: Memo::new(),
        };
        example.refresh();
        example
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Result of the calculation for the current number
    pub fn calculation(&self) -> i128 {
        self.memo.value().copied().unwrap_or_default()
    }

    pub fn computations(&self) -> usize {
        self.memo.computations()
    }

    /// Append a digit. A digit that would overflow the number is dropped.
    pub fn push_digit(&mut self, digit: char) {
        let Some(digit) = digit.to_digit(10).map(i64::from) else {
            return;
        };

        let shifted = self.number.checked_mul(10);
        let next = if self.number < 0 {
            shifted.and_then(|n| n.checked_sub(digit))
        } else {
            shifted.and_then(|n| n.checked_add(digit))
        };

        match next {
            Some(number) => {
                self.number = number;
                self.refresh();
            }
            None => tracing::debug!("Ignoring digit {digit}, number would overflow"),
        }
    }

    pub fn pop_digit(&mut self) {
        self.number /= 10;
        self.refresh();
    }

    pub fn step(&mut self, delta: i64) {
        self.number = self.number.saturating_add(delta);
        self.refresh();
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.memo.get_or_compute(self.number, |n| expensive_calculation(*n));
    }
}

impl Default for MemoExample {
    fn default() -> Self {
        Self::new()
    }
}
