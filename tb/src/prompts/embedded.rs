//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

/// System instruction fixing the planner role
pub const SYSTEM: &str = include_str!("../../prompts/system.pmt");

/// User message template; expects `task` and `schema_name`
pub const USER: &str = include_str!("../../prompts/user.pmt");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_role() {
        let system = SYSTEM;
        assert!(system.contains("expert project planner"));
        assert!(system.contains("3-7"));
    }

    #[test]
    fn test_user_template_placeholders() {
        let user = USER;
        assert!(user.contains("{{task}}"));
        assert!(user.contains("{{schema_name}}"));
    }
}
