//! Curated Anchorman quote tables
//!
//! Static data: one table per weather mood, plus the speaker allowlist
//! the selector filters against. Not user-editable.

/// A single curated quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherQuote {
    pub quote: &'static str,
    pub speaker: &'static str,
}

/// Speakers quotes may be attributed to
pub const ALLOWED_SPEAKERS: [&str; 9] = [
    "Ron Burgundy",
    "Brian Fantana",
    "Brick Tamland",
    "Champ Kind",
    "Ed Harken",
    "Arturo Mendez",
    "Public News anchor",
    "Motorcyclist",
    "Narrator",
];

pub const SUN_BLUEBIRD: [WeatherQuote; 6] = [
    WeatherQuote {
        quote: "San Diego. Drink it in. It always goes down smooth.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "By the beard of Zeus!",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "You stay classy, San Diego.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "I don't know how to put this, but I'm kind of a big deal.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "I have many leather-bound books, and my apartment smells of rich mahogany.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "Super duper, gang! Super duper!",
        speaker: "Ron Burgundy",
    },
];

pub const POWDER_NEW_SNOW: [WeatherQuote; 6] = [
    WeatherQuote {
        quote: "Cannonball!",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "Panda Watch! The mood is tense.",
        speaker: "Brian Fantana",
    },
    WeatherQuote {
        quote: "No commercials! No mercy!",
        speaker: "Public News anchor",
    },
    WeatherQuote {
        quote: "That's how I roll!",
        speaker: "Motorcyclist",
    },
    WeatherQuote {
        quote: "This is happening.",
        speaker: "Motorcyclist",
    },
    WeatherQuote {
        quote: "Go time.",
        speaker: "Narrator",
    },
];

pub const STORM_WIND: [WeatherQuote; 6] = [
    WeatherQuote {
        quote: "Boy, that escalated quickly.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "I mean, that really got out of hand fast!",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "It jumped up a notch.",
        speaker: "Champ Kind",
    },
    WeatherQuote {
        quote: "There were horses and a man on fire...",
        speaker: "Brick Tamland",
    },
    WeatherQuote {
        quote: "The sewers run red with Burgundy's blood.",
        speaker: "Arturo Mendez",
    },
    WeatherQuote {
        quote: "Policia!",
        speaker: "Arturo Mendez",
    },
];

pub const WHITEOUT_FOG_FLATLIGHT: [WeatherQuote; 6] = [
    WeatherQuote {
        quote: "I'm in a glass case of emotion!",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "I don't know what we're yelling about!",
        speaker: "Brick Tamland",
    },
    WeatherQuote {
        quote: "Loud noises!",
        speaker: "Brick Tamland",
    },
    WeatherQuote {
        quote: "Agree to disagree.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "That doesn't make any sense.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "I'm Ron Burgundy?",
        speaker: "Ron Burgundy",
    },
];

pub const COLD_SNAP: [WeatherQuote; 6] = [
    WeatherQuote {
        quote: "Mm, I love scotch. I love Scotch. Scotchy, Scotch, Scotch.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "Here it goes down. Down into my belly.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "It's quite pungent.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "It stings the nostrils.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "In a good way.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "60% of the time, it works every time.",
        speaker: "Brian Fantana",
    },
];

pub const SPRING_SLUSH_HOT: [WeatherQuote; 6] = [
    WeatherQuote {
        quote: "It's so damn hot... milk was a bad choice!",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "Milk was a bad choice.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "I'm expressing my inner anguish THROUGH THE MAJESTY OF SONG!",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "Neat-o, gang.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "Super duper!",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "Cannonball!",
        speaker: "Ron Burgundy",
    },
];

pub const ICE_HARDPACK: [WeatherQuote; 6] = [
    WeatherQuote {
        quote: "Keep your head on a swivel.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "That's bush. Bush league.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "If you were a man, I would punch you.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "It's terrible!",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "Big deal. I am very professional.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "Anything you put on that prompter, Burgundy will read!",
        speaker: "Ed Harken",
    },
];

pub const APRES: [WeatherQuote; 6] = [
    WeatherQuote {
        quote: "We've been coming to the same party for 12 years now...and in no way is that depressing.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "Champ here. I'm all about havin' fun.",
        speaker: "Champ Kind",
    },
    WeatherQuote {
        quote: "Time to musk up.",
        speaker: "Brian Fantana",
    },
    WeatherQuote {
        quote: "It stings the nostrils. In a good way.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "You stay classy, San Diego.",
        speaker: "Ron Burgundy",
    },
    WeatherQuote {
        quote: "Go fuck yourself, San Diego!",
        speaker: "Ron Burgundy",
    },
];
