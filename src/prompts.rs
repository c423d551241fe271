pub const STYLE_SYSTEM: &str = include_str!("../data/prompts/style_system.txt");
pub const STYLE_USER: &str = include_str!("../data/prompts/style_user.txt");
pub const POSE_SYSTEM: &str = include_str!("../data/prompts/pose_system.txt");
pub const POSE_USER: &str = include_str!("../data/prompts/pose_user.txt");

/// Fixed aspect-ratio/version parameters every pose prompt must end with.
pub const POSE_SUFFIX: &str = "--ar 3:4 --v 6.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!STYLE_SYSTEM.is_empty());
        assert!(!STYLE_USER.is_empty());
        assert!(!POSE_SYSTEM.is_empty());
        assert!(!POSE_USER.is_empty());
    }

    #[test]
    fn test_style_system_covers_all_five_dimensions() {
        assert!(STYLE_SYSTEM.contains("Aesthetic"));
        assert!(STYLE_SYSTEM.contains("Mood"));
        assert!(STYLE_SYSTEM.contains("lighting"));
        assert!(STYLE_SYSTEM.contains("Composition"));
        assert!(STYLE_SYSTEM.contains("fabric"));
    }

    #[test]
    fn test_pose_system_enumerates_eight_categories() {
        for label in [
            "Spontaneous Laughter",
            "The Forehead Touch",
            "Under The Veil",
            "Environmental/Grand",
            "Classic Glamour",
            "Ring/Hands/Bouquet",
            "The Whispered Secret",
            "Black & White Emotion",
        ] {
            assert!(POSE_SYSTEM.contains(label), "missing category: {}", label);
        }
    }

    #[test]
    fn test_pose_system_demands_suffix() {
        assert!(POSE_SYSTEM.contains(POSE_SUFFIX));
    }
}
