use std::fmt;

use crate::models::{Profile, Skill, PROFILE, SKILLS};

const PREAMBLE: &str = "You are a helpful assistant for a portfolio website. Answer questions about the portfolio owner (the developer) using ONLY the following information. Be concise and friendly. If asked something not covered below, say you don't have that information and suggest they check the portfolio or contact directly.";

/// The text block the assistant is told to answer from.
///
/// Rebuilt on every call from static data, so two calls always return the
/// same bytes.
pub fn portfolio_context() -> String {
    render_context(&PROFILE, SKILLS)
}

pub fn render_context(profile: &Profile, skills: &[Skill]) -> String {
    PortfolioContext { profile, skills }.to_string()
}

struct PortfolioContext<'a> {
    profile: &'a Profile,
    skills: &'a [Skill],
}

impl fmt::Display for PortfolioContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.profile;

        f.write_str(PREAMBLE)?;
        f.write_str("\n\n## About\n")?;
        for line in profile.about {
            writeln!(f, "- {}", line)?;
        }

        f.write_str("\n## Experience\n")?;
        for (index, job) in profile.experience.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            writeln!(
                f,
                "{}. **{} at {}** ({}, {}, {})",
                index + 1,
                job.title,
                job.company,
                job.period,
                job.employment_type,
                job.location
            )?;
            writeln!(f, "   - {}", job.summary)?;
        }

        f.write_str("\n## Education\n")?;
        for entry in profile.education {
            writeln!(f, "- {}", entry)?;
        }

        f.write_str("\n## Skills & technologies\n")?;
        writeln!(f, "{}", flatten_skills(self.skills))?;

        f.write_str("\n## Projects (high level)\n")?;
        for project in profile.projects {
            let marker = if project.featured { " (Main)" } else { "" };
            write!(
                f,
                "- **{}**{}: {} GitHub: {}",
                project.name, marker, project.summary, project.github
            )?;
            if let Some(live) = project.live {
                write!(f, " | Live: {}", live)?;
            }
            f.write_str("\n")?;
        }

        f.write_str("\n## Contact\n")?;
        writeln!(f, "- Email: {}", profile.email)?;
        f.write_str("- Contact form on the portfolio opens the user's email client to send a message to the above email.")
    }
}

fn flatten_skills(skills: &[Skill]) -> String {
    skills.iter().map(|s| s.name).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_deterministic() {
        assert_eq!(portfolio_context(), portfolio_context());
    }

    #[test]
    fn test_context_contains_every_section() {
        let context = portfolio_context();

        for heading in [
            "## About",
            "## Experience",
            "## Education",
            "## Skills & technologies",
            "## Projects (high level)",
            "## Contact",
        ] {
            assert!(context.contains(heading), "missing {}", heading);
        }
        assert!(context.contains("1. **Software Developer at Healthpilot.ai** (Aug 2025 - Present, Full time, Chennai, India)"));
        assert!(context.contains("3. **MERN Stack Developer at Brocamp**"));
        assert!(context.contains("Email: madhankumar4195@gmail.com"));
        assert!(context.contains("opens the user's email client"));
    }

    #[test]
    fn test_skills_are_comma_joined() {
        let context = portfolio_context();
        assert!(context.contains("Cursor, GitHub Copilot, Claude Code, Agentic AI"));
        assert!(context.contains("DSA, AI Integration\n"));
    }

    #[test]
    fn test_projects_render_links() {
        let context = portfolio_context();
        assert!(context.contains("- **GymRatzz E-commerce** (Main): MERN stack e-commerce"));
        assert!(context.contains("GitHub: github.com/S-MADHAN-KUMAR/gymratzz | Live: gymratzz.shop"));
        assert!(context.contains("GitHub: github.com/S-MADHAN-KUMAR/UserManagement\n"));
        assert!(!context.contains("UserManagement | Live"));
    }

    #[test]
    fn test_empty_skills_still_render() {
        let context = render_context(&PROFILE, &[]);
        assert!(context.contains("## Skills & technologies\n\n\n## Projects"));
        assert!(context.contains("## Contact"));
    }
}
