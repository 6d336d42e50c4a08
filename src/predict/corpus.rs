//! Built-in corpus of common address-bar queries.
//!
//! Entries must be lowercase; the engine extends this list with the bang
//! catalogue (names and triggers) at construction time.

pub const COMMON_QUERIES: &[&str] = &[
    "weather",
    "weather tomorrow",
    "news",
    "news today",
    "translate",
    "maps",
    "directions",
    "email",
    "gmail",
    "calendar",
    "youtube",
    "facebook",
    "instagram",
    "twitter",
    "reddit",
    "amazon",
    "netflix",
    "spotify",
    "twitch",
    "wikipedia",
    "dictionary",
    "thesaurus",
    "calculator",
    "timer",
    "stopwatch",
    "unit converter",
    "currency converter",
    "stock market",
    "bitcoin price",
    "movies near me",
    "restaurants near me",
    "coffee near me",
    "pizza delivery",
    "flight status",
    "flight tickets",
    "hotels",
    "train times",
    "bus schedule",
    "football scores",
    "basketball scores",
    "premier league",
    "champions league",
    "world cup",
    "olympics",
    "recipes",
    "chicken recipes",
    "pasta recipes",
    "vegan recipes",
    "baking",
    "cocktails",
    "workout plan",
    "yoga",
    "meditation",
    "running shoes",
    "headphones",
    "laptop deals",
    "phone comparison",
    "javascript",
    "javascript tutorial",
    "typescript",
    "python",
    "python tutorial",
    "rust programming",
    "rust tutorial",
    "golang",
    "java",
    "c programming",
    "sql",
    "regex tester",
    "json formatter",
    "markdown",
    "git commands",
    "github",
    "stack overflow",
    "docker",
    "kubernetes",
    "linux commands",
    "vim commands",
    "machine learning",
    "artificial intelligence",
    "deep learning",
    "data science",
    "statistics",
    "linear algebra",
    "calculus",
    "physics",
    "chemistry",
    "biology",
    "history",
    "geography",
    "world map",
    "time zones",
    "holidays",
    "movies",
    "tv shows",
    "music",
    "podcasts",
    "audiobooks",
    "ebooks",
    "lyrics",
    "jokes",
    "quotes",
    "horoscope",
    "lottery numbers",
    "jobs",
    "remote jobs",
    "resume template",
    "interview questions",
    "salary calculator",
    "tax calculator",
    "mortgage calculator",
    "exchange rate",
];
