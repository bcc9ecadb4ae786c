//! Seeded mock data.
//!
//! Produces one chat per user with a handful of messages spread over the
//! weeks before `now`. The same seed and anchor time always yield the same
//! fixtures.

use crate::fixtures::Fixtures;
use crate::model::{Chat, ChatId, Message, MessageId, Timestamp, User, UserId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Newest message of a chat is at most this old.
const MAX_LAST_MESSAGE_AGE_MS: i64 = 45 * DAY_MS;
const MIN_MESSAGES_PER_CHAT: usize = 3;
const MAX_MESSAGES_PER_CHAT: usize = 12;
const PRESENCE_PROBABILITY: f64 = 0.4;

const NAMES: &[&str] = &[
    "Ann Carter",
    "Bruno Diaz",
    "Chloe Martin",
    "Dmitri Volkov",
    "Elena Rossi",
    "Farid Haddad",
    "Grace Kim",
    "Hugo Lefebvre",
    "Ines Moreau",
    "Jonas Berg",
    "Keiko Tanaka",
    "Liam O'Brien",
    "Maya Patel",
    "Noah Fischer",
    "Olivia Brown",
    "Pablo Ortega",
];

const PHRASES: &[&str] = &[
    "Hey! How are you doing?",
    "Did you see the match last night?",
    "I'll be there in ten minutes",
    "Can you send me the slides?",
    "Haha, that's hilarious",
    "Let's grab lunch tomorrow",
    "Sounds good to me",
    "Running a bit late, sorry!",
    "Thanks for yesterday, it was great",
    "Where did you park?",
    "Happy birthday!!",
    "I just finished the book you lent me",
    "Are we still on for Friday?",
    "Call me when you get a chance",
    "The club meeting moved to 7pm",
    "Good night!",
];

/// Parameters for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// RNG seed.
    pub seed: u64,
    /// Number of users, and therefore chats.
    pub user_count: usize,
    /// Anchor time; every generated message is at or before it.
    pub now: Timestamp,
}

impl GeneratorConfig {
    /// Create a generator configuration.
    pub fn new(seed: u64, user_count: usize, now: Timestamp) -> Self {
        Self {
            seed,
            user_count,
            now,
        }
    }
}

/// Generate fixtures. Ids start at 1 in each id space.
pub fn generate(config: &GeneratorConfig) -> Fixtures {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut fixtures = Fixtures::default();
    let mut next_message: u64 = 1;

    for index in 0..config.user_count {
        let raw_id = index as u64 + 1;
        let user_id = UserId::new(raw_id);
        let chat_id = ChatId::new(raw_id);

        fixtures.users.push(User::new(
            user_id,
            display_name(index),
            format!("/images/users/{raw_id}.png"),
            rng.gen_bool(PRESENCE_PROBABILITY),
        ));

        let count = rng.gen_range(MIN_MESSAGES_PER_CHAT..=MAX_MESSAGES_PER_CHAT);
        let dates = message_dates(&mut rng, config.now, count);

        let mut message_ids = Vec::with_capacity(count);
        for date in dates {
            let content = PHRASES[rng.gen_range(0..PHRASES.len())];
            let written_by_me = rng.gen_bool(0.5);

            let id = MessageId::new(next_message);
            fixtures.messages.push(Message::new(
                id,
                chat_id,
                content,
                date,
                written_by_me,
            ));
            message_ids.push(id);
            next_message += 1;
        }

        let last_message = message_ids.last().copied();
        fixtures
            .chats
            .push(Chat::new(chat_id, user_id, last_message, message_ids));
    }

    fixtures
}

/// Names repeat with a numeric suffix once the list is exhausted.
fn display_name(index: usize) -> String {
    let base = NAMES[index % NAMES.len()];
    match index / NAMES.len() {
        0 => base.to_string(),
        round => format!("{base} {}", round + 1),
    }
}

/// `count` ascending dates ending at a random point before `now`.
fn message_dates(rng: &mut StdRng, now: Timestamp, count: usize) -> Vec<Timestamp> {
    let mut current = now.offset_millis(-rng.gen_range(0..MAX_LAST_MESSAGE_AGE_MS));
    let mut dates = Vec::with_capacity(count);

    for _ in 0..count {
        dates.push(current);
        current = current.offset_millis(-rng.gen_range(MINUTE_MS..6 * HOUR_MS));
    }

    dates.reverse();
    dates
}
