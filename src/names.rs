use rand::Rng;
use rand::rngs::ThreadRng;

/// Number of word categories a generated name can draw from.
pub const MAX_WORDS: usize = 3;

const COLORS: &[&str] = &[
    "amber", "aqua", "azure", "beige", "black", "blue", "bronze", "brown", "coral", "crimson",
    "cyan", "gold", "gray", "green", "indigo", "ivory", "jade", "khaki", "lavender", "lime",
    "magenta", "maroon", "mint", "navy", "olive", "orange", "peach", "pink", "plum", "purple",
    "red", "rose", "ruby", "rust", "salmon", "sapphire", "scarlet", "silver", "tan", "teal",
    "turquoise", "violet", "white", "yellow", "ochre", "sepia", "cobalt", "copper", "emerald",
    "pearl",
];

const ADJECTIVES: &[&str] = &[
    "bold", "calm", "eager", "fair", "glad", "hazy", "icy", "keen", "lush", "mild",
    "neat", "pale", "quick", "rosy", "soft", "tidy", "vast", "warm", "zany", "crisp",
    "dusty", "fresh", "happy", "jolly", "kind", "lazy", "merry", "noble", "quiet", "rapid",
    "tall", "vivid", "wise", "young", "agile", "brave", "clever", "daring", "gentle", "humble",
    "lively", "mellow", "nimble", "proud", "shy", "sleepy", "swift", "tender", "witty", "zesty",
];

const ANIMALS: &[&str] = &[
    "ant", "bat", "cat", "dog", "elk", "fox", "gnu", "hawk", "ibis", "koi",
    "lynx", "mole", "newt", "owl", "puma", "quail", "ram", "seal", "toad", "vole",
    "wolf", "yak", "crab", "eel", "frog", "goat", "hare", "koala", "lamb", "mink",
    "narwhal", "orca", "panda", "raven", "swan", "tiger", "urchin", "viper", "wren", "zebra",
    "bear", "crow", "dove", "egret", "finch", "gull", "heron", "otter", "badger", "walrus",
];

const GIVEN_NAMES: &[&str] = &[
    "ada", "alan", "alice", "amir", "anna", "arlo", "beatrix", "boris", "carla", "cyrus",
    "dana", "diego", "edith", "elena", "ezra", "farah", "felix", "greta", "hugo", "ines",
    "ivan", "jonah", "june", "karin", "kofi", "lena", "liam", "lucia", "malik", "mara",
    "nadia", "niko", "olga", "oscar", "priya", "quinn", "rosa", "rufus", "sana", "silas",
    "tariq", "thea", "ursula", "vera", "wanda", "xavier", "yara", "yusuf", "zora", "zeke",
];

/// Something that can come up with a candidate name.
///
/// The production source is [`RandomNames`]; tests substitute scripted
/// sequences.
pub trait NameSource {
    fn generate(&mut self, word_count: usize, separator: &str) -> String;
}

/// Builds `color<sep>adjective<sep>subject` names, where the subject pool
/// (animals or given names) is picked afresh on every call.
pub struct RandomNames<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomNames {
    /// Draws from the thread-local process RNG.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomNames {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomNames<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        words[self.rng.random_range(0..words.len())]
    }
}

impl<R: Rng> NameSource for RandomNames<R> {
    fn generate(&mut self, word_count: usize, separator: &str) -> String {
        let subjects = if self.rng.random_bool(0.5) {
            ANIMALS
        } else {
            GIVEN_NAMES
        };
        let words = [self.pick(COLORS), self.pick(ADJECTIVES), self.pick(subjects)];
        words[..word_count.min(MAX_WORDS)].join(separator)
    }
}
