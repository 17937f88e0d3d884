mod chat;
pub mod profile;
pub mod skill;

pub use chat::{ChatRequest, ChatResponse, ErrorBody, Message, Role};
pub use profile::{Experience, Profile, Project, PROFILE};
pub use skill::{Skill, SkillCategory, SKILLS, SKILL_CATEGORIES};
