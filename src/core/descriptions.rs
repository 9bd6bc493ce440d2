use crate::domain::model::NumberKind;

pub const FALLBACK_DESCRIPTION: &str = "Description not available";

const LIFE_PATH: [&str; 9] = [
    "You are a natural leader with strong independence and originality. You're ambitious, individualistic, and have a strong drive to succeed on your own terms.",
    "You are diplomatic and cooperative. Your strength lies in your ability to find balance and harmony in relationships and partnerships.",
    "You are creative, expressive, and socially engaging. You have a natural charm and optimism that draws others to you.",
    "You are practical, methodical, and highly organized. You value stability and are willing to work hard to build a secure foundation.",
    "You are adaptable, versatile, and value freedom. You embrace change and seek varied experiences throughout life.",
    "You are responsible, nurturing, and service-oriented. You find fulfillment in helping others and creating harmony.",
    "You are analytical, introspective, and spiritually inclined. You seek knowledge and truth through deep contemplation.",
    "You are ambitious, goal-oriented, and have strong leadership abilities. You're drawn to power and material success.",
    "You are compassionate, idealistic, and humanitarian. You see the bigger picture and are drawn to serve humanity.",
];

const EXPRESSION: [&str; 9] = [
    "You express yourself as a leader and innovator. You're independent, original, and have the ability to pioneer new paths.",
    "You express yourself through diplomacy and cooperation. You're sensitive to others' needs and excel in partnerships.",
    "You express yourself creatively and socially. You're optimistic, expressive, and have natural communication skills.",
    "You express yourself through methodical work and organization. You're practical, reliable, and build solid foundations.",
    "You express yourself through versatility and adaptability. You're curious, progressive, and value freedom.",
    "You express yourself through responsibility and service. You're nurturing, supportive, and create harmony.",
    "You express yourself through analysis and contemplation. You're introspective, perfectionistic, and seek deeper meaning.",
    "You express yourself through ambition and authority. You're powerful, goal-oriented, and drawn to material success.",
    "You express yourself through compassion and idealism. You're humanitarian, spiritual, and have universal awareness.",
];

const SOUL_URGE: [&str; 9] = [
    "Deep down, you desire independence and leadership. You're driven by the need to be original and to pioneer new paths.",
    "Your inner desire is for harmony and cooperation. You seek peace and meaningful connections with others.",
    "Your soul yearns for self-expression and joy. You're motivated by creativity, sociability, and optimism.",
    "You inwardly desire stability and order. Your motivation comes from building secure foundations and practical achievements.",
    "Your inner desire is for freedom and change. You seek varied experiences and resist limitations.",
    "Deep down, you desire to be of service and create harmony. You're motivated by responsibility and nurturing others.",
    "Your soul yearns for wisdom and understanding. You're driven by the pursuit of knowledge and perfection.",
    "Your inner desire is for power and accomplishment. You're motivated by ambition and material success.",
    "Deep down, you desire to make a difference in the world. You're motivated by compassion and universal service.",
];

const PERSONALITY: [&str; 9] = [
    "Others see you as independent, strong-willed, and original. You appear confident, assertive, and self-reliant.",
    "People perceive you as diplomatic, cooperative, and sensitive. You come across as balanced, considerate, and peaceful.",
    "Others see you as creative, social, and optimistic. You appear expressive, charming, and full of life.",
    "People perceive you as practical, reliable, and organized. You come across as stable, hardworking, and dependable.",
    "Others see you as adaptable, progressive, and freedom-loving. You appear versatile, curious, and adventurous.",
    "People perceive you as responsible, nurturing, and harmonious. You come across as caring, supportive, and balanced.",
    "Others see you as analytical, thoughtful, and perfectionistic. You appear introspective, wise, and detail-oriented.",
    "People perceive you as powerful, ambitious, and authoritative. You come across as confident, goal-oriented, and in control.",
    "Others see you as compassionate, idealistic, and spiritual. You appear wise, humanitarian, and universally minded.",
];

fn table(kind: NumberKind) -> &'static [&'static str; 9] {
    match kind {
        NumberKind::LifePath => &LIFE_PATH,
        NumberKind::Expression => &EXPRESSION,
        NumberKind::SoulUrge => &SOUL_URGE,
        NumberKind::Personality => &PERSONALITY,
    }
}

/// Looks up the canned sentence for `score`; anything outside `1..=9`
/// gets [`FALLBACK_DESCRIPTION`].
pub fn describe(kind: NumberKind, score: u32) -> &'static str {
    match score {
        1..=9 => table(kind)[(score - 1) as usize],
        _ => FALLBACK_DESCRIPTION,
    }
}
