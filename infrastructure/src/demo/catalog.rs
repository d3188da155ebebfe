//! Built-in demo themes, polls and results.

use votestream_application::DemoStore;
use votestream_domain::{Poll, PollId, PollResults, Theme};

fn theme(
    key: &str,
    name: &str,
    slug: &str,
    description: &str,
    color: &str,
    icon: &str,
    polls: Vec<Poll>,
) -> Theme {
    let mut theme = Theme::new(key, name);
    theme.slug = slug.to_string();
    theme.description = description.to_string();
    theme.color = color.to_string();
    theme.icon = icon.to_string();
    theme.polls = polls.into_iter().map(|p| p.with_theme(key)).collect();
    theme
}

/// The three demo themes
pub fn demo_themes() -> Vec<Theme> {
    vec![
        theme(
            "OnTrend",
            "#OnTrend",
            "on-trend",
            "The hottest topics of the moment. From technology and social media to the latest \
             releases everyone's talking about. Vote and discover if you think like the majority!",
            "#ff6b6b",
            "🔥",
            vec![
                Poll::new(
                    1,
                    "Which frontend framework will dominate next year?",
                    &["React", "Vue.js", "Angular"],
                ),
                Poll::new(
                    2,
                    "What database would you pick for a new project?",
                    &["PostgreSQL", "MongoDB", "MySQL", "SQLite"],
                ),
                Poll::new(
                    3,
                    "Will AI assistants write most of our code within five years?",
                    &["Yes", "No", "Only boilerplate", "It already does"],
                ),
            ],
        ),
        theme(
            "MoralDilemmas",
            "Moral Dilemmas",
            "moral-dilemmas",
            "Difficult questions with no right answer. Test your principles and discover how the \
             world would react to these extreme situations.",
            "#4ecdc4",
            "🤔",
            vec![
                Poll::new(
                    4,
                    "You find a wallet with 500€ and an ID. What do you do?",
                    &[
                        "Return everything",
                        "Return it and keep a reward",
                        "Hand it to the police",
                        "Keep the money",
                    ],
                ),
                Poll::new(
                    5,
                    "Would you read your partner's messages if you had the chance?",
                    &["Never", "Only with a good reason", "Yes", "I already have"],
                ),
            ],
        ),
        theme(
            "Sports",
            "⚽ Sports",
            "sports",
            "The boldest predictions from the world of sports. Will you nail your forecasts?",
            "#45b7d1",
            "⚽",
            vec![
                Poll::new(
                    6,
                    "Who wins the next Champions League?",
                    &["Real Madrid", "Manchester City", "Bayern Munich", "Another team"],
                ),
                Poll::new(
                    7,
                    "Greatest tennis player of all time?",
                    &["Djokovic", "Nadal", "Federer", "Serena Williams", "Alcaraz"],
                ),
            ],
        ),
    ]
}

/// Results seeded for the first two polls
pub fn demo_results() -> Vec<(PollId, PollResults)> {
    vec![
        (
            PollId(1),
            PollResults::from_pairs([("React", 25), ("Vue.js", 18), ("Angular", 12)]),
        ),
        (
            PollId(2),
            PollResults::from_pairs([
                ("PostgreSQL", 30),
                ("MongoDB", 22),
                ("MySQL", 15),
                ("SQLite", 8),
            ]),
        ),
    ]
}

/// Demo store seeded with the built-in catalog
pub fn seeded_demo_store() -> DemoStore {
    DemoStore::new(demo_themes(), demo_results())
}
