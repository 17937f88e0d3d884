use serde::Serialize;

/// A technology shown in the skills explorer and flattened into the chat context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub icon_fallback: &'static str,
    pub color: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

impl SkillCategory {
    pub fn matches(&self, label: &str) -> bool {
        self.label.eq_ignore_ascii_case(label.trim())
    }
}

const fn skill(
    id: u32,
    name: &'static str,
    category: &'static str,
    icon: &'static str,
    icon_fallback: &'static str,
    color: &'static str,
    kind: &'static str,
) -> Skill {
    Skill { id, name, category, icon, icon_fallback, color, kind }
}

pub static SKILLS: &[Skill] = &[
    skill(
        1,
        "Cursor",
        "AI Tools",
        "https://cursor.sh/brand/icon.svg",
        "https://www.cursor.com/favicon.ico",
        "#000000",
        "tool",
    ),
    skill(
        2,
        "GitHub Copilot",
        "AI Tools",
        "https://github.githubassets.com/assets/copilot-4a5b3aa5a694.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/github/github-original.svg",
        "#6e40c9",
        "tool",
    ),
    skill(
        3,
        "Claude Code",
        "AI Tools",
        "https://claude.ai/images/claude_app_icon.png",
        "https://anthropic.com/favicon.ico",
        "#D97757",
        "tool",
    ),
    skill(
        4,
        "Agentic AI",
        "AI Tools",
        "https://cdn-icons-png.flaticon.com/512/8637/8637099.png",
        "https://cdn-icons-png.flaticon.com/512/6996/6996521.png",
        "#7C3AED",
        "concept",
    ),
    skill(
        5,
        "AI / ML",
        "AI Tools",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tensorflow/tensorflow-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/pytorch/pytorch-original.svg",
        "#FF6F00",
        "domain",
    ),
    skill(
        6,
        "LLM API",
        "AI Tools",
        "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4d/OpenAI_Logo.svg/512px-OpenAI_Logo.svg.png",
        "https://cdn-icons-png.flaticon.com/512/13946/13946134.png",
        "#10A37F",
        "concept",
    ),
    skill(
        7,
        "Generative UI",
        "AI Tools",
        "https://cdn-icons-png.flaticon.com/512/10739/10739958.png",
        "https://cdn-icons-png.flaticon.com/512/8637/8637099.png",
        "#A855F7",
        "concept",
    ),
    skill(
        8,
        "CopilotKit",
        "AI Tools",
        "https://avatars.githubusercontent.com/u/152502674?s=200&v=4",
        "https://cdn-icons-png.flaticon.com/512/6996/6996521.png",
        "#6366F1",
        "framework",
    ),
    skill(
        9,
        "Google ADK",
        "AI Tools",
        "https://www.gstatic.com/lamda/images/gemini_sparkle_v002_d4735304ff6292a690345.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/google/google-original.svg",
        "#4285F4",
        "framework",
    ),
    skill(
        10,
        "MCP",
        "AI Tools",
        "https://claude.ai/images/claude_app_icon.png",
        "https://cdn-icons-png.flaticon.com/512/2103/2103652.png",
        "#D97757",
        "protocol",
    ),
    skill(
        11,
        "ZenFlow",
        "Tools",
        "https://cdn-icons-png.flaticon.com/512/3524/3524636.png",
        "https://cdn-icons-png.flaticon.com/512/3524/3524636.png",
        "#06B6D4",
        "tool",
    ),
    skill(
        12,
        "JavaScript",
        "Languages",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-plain.svg",
        "#F7DF1E",
        "language",
    ),
    skill(
        13,
        "TypeScript",
        "Languages",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-plain.svg",
        "#3178C6",
        "language",
    ),
    skill(
        14,
        "Python",
        "Languages",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-plain.svg",
        "#3776AB",
        "language",
    ),
    skill(
        15,
        "React",
        "Frontend",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-plain.svg",
        "#61DAFB",
        "framework",
    ),
    skill(
        16,
        "React Native",
        "Mobile",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-plain.svg",
        "#61DAFB",
        "framework",
    ),
    skill(
        17,
        "Expo",
        "Mobile",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/expo/expo-original.svg",
        "https://avatars.githubusercontent.com/u/12504344?s=200&v=4",
        "#000020",
        "framework",
    ),
    skill(
        18,
        "Tailwind CSS",
        "Frontend",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tailwindcss/tailwindcss-original.svg",
        "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d5/Tailwind_CSS_Logo.svg/512px-Tailwind_CSS_Logo.svg.png",
        "#06B6D4",
        "framework",
    ),
    skill(
        19,
        "Bootstrap",
        "Frontend",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/bootstrap/bootstrap-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/bootstrap/bootstrap-plain.svg",
        "#7952B3",
        "framework",
    ),
    skill(
        20,
        "Node.js",
        "Backend",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-plain.svg",
        "#339933",
        "runtime",
    ),
    skill(
        21,
        "Bun",
        "Backend",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/bun/bun-original.svg",
        "https://bun.sh/logo.svg",
        "#FBF0DF",
        "runtime",
    ),
    skill(
        22,
        "MongoDB",
        "Database",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-plain.svg",
        "#47A248",
        "database",
    ),
    skill(
        23,
        "SQL",
        "Database",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg",
        "#4479A1",
        "database",
    ),
    skill(
        24,
        "Supabase",
        "Database",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/supabase/supabase-original.svg",
        "https://avatars.githubusercontent.com/u/54469796?s=200&v=4",
        "#3ECF8E",
        "database",
    ),
    skill(
        25,
        "Neon",
        "Database",
        "https://avatars.githubusercontent.com/u/77690634?s=200&v=4",
        "https://neon.tech/favicon/favicon.svg",
        "#00E5BF",
        "database",
    ),
    skill(
        26,
        "Linux",
        "DevOps",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/linux/linux-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/linux/linux-plain.svg",
        "#FCC624",
        "os",
    ),
    skill(
        27,
        "Git",
        "DevOps",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-plain.svg",
        "#F05032",
        "tool",
    ),
    skill(
        28,
        "GitHub",
        "DevOps",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/github/github-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/github/github-plain.svg",
        "#181717",
        "platform",
    ),
    skill(
        29,
        "Figma",
        "Design",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/figma/figma-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/figma/figma-plain.svg",
        "#F24E1E",
        "tool",
    ),
    skill(
        30,
        "MERN Stack",
        "Fullstack",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
        "#47A248",
        "stack",
    ),
    skill(
        31,
        "SaaS",
        "Fullstack",
        "https://cdn-icons-png.flaticon.com/512/9321/9321329.png",
        "https://cdn-icons-png.flaticon.com/512/8637/8637099.png",
        "#6366F1",
        "concept",
    ),
    skill(
        32,
        "Healthcare IT",
        "Domain",
        "https://cdn-icons-png.flaticon.com/512/3774/3774299.png",
        "https://cdn-icons-png.flaticon.com/512/2785/2785482.png",
        "#0EA5E9",
        "domain",
    ),
    skill(
        33,
        "DSA",
        "Computer Science",
        "https://cdn-icons-png.flaticon.com/512/8637/8637099.png",
        "https://cdn-icons-png.flaticon.com/512/1006/1006363.png",
        "#F59E0B",
        "concept",
    ),
    skill(
        34,
        "AI Integration",
        "AI Tools",
        "https://cdn-icons-png.flaticon.com/512/8637/8637099.png",
        "https://cdn-icons-png.flaticon.com/512/10739/10739958.png",
        "#8B5CF6",
        "concept",
    ),
];

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory { id: "ai-tools", label: "AI Tools", color: "#7C3AED" },
    SkillCategory { id: "languages", label: "Languages", color: "#F59E0B" },
    SkillCategory { id: "frontend", label: "Frontend", color: "#06B6D4" },
    SkillCategory { id: "backend", label: "Backend", color: "#339933" },
    SkillCategory { id: "mobile", label: "Mobile", color: "#61DAFB" },
    SkillCategory { id: "database", label: "Database", color: "#3ECF8E" },
    SkillCategory { id: "devops", label: "DevOps", color: "#F05032" },
    SkillCategory { id: "design", label: "Design", color: "#F24E1E" },
    SkillCategory { id: "fullstack", label: "Fullstack", color: "#6366F1" },
    SkillCategory { id: "domain", label: "Domain", color: "#0EA5E9" },
    SkillCategory { id: "computer-science", label: "Computer Science", color: "#F59E0B" },
    SkillCategory { id: "tools", label: "Tools", color: "#10B981" },
];

pub fn skills_in_category<'a>(skills: &'a [Skill], category: &SkillCategory) -> Vec<&'a Skill> {
    skills
        .iter()
        .filter(|s| category.matches(s.category))
        .collect()
}

pub fn find_category(label: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|c| c.matches(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_skill_belongs_to_a_known_category() {
        for skill in SKILLS {
            assert!(
                find_category(skill.category).is_some(),
                "{} has unknown category {}",
                skill.name,
                skill.category
            );
        }
    }

    #[test]
    fn test_skill_ids_are_unique() {
        let mut ids: Vec<u32> = SKILLS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SKILLS.len());
    }

    #[test]
    fn test_category_lookup_ignores_case() {
        let frontend = find_category("frontend").unwrap();
        assert_eq!(frontend.id, "frontend");

        let names: Vec<&str> = skills_in_category(SKILLS, frontend).iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["React", "Tailwind CSS", "Bootstrap"]);
    }

    #[test]
    fn test_skill_serializes_with_ui_field_names() {
        let value = serde_json::to_value(SKILLS[0]).unwrap();
        assert_eq!(value["name"], "Cursor");
        assert_eq!(value["type"], "tool");
        assert!(value.get("iconFallback").is_some());
    }
}
