use utoipa::OpenApi;

use crate::modules::public_api::schemas::{
    PortfolioSummary, PublicAchievement, PublicCategory, PublicExperience, PublicProject,
    PublicScreenshot, PublicSkill,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only API over published portfolio content. \
            All write operations live behind the management dashboard; \
            this surface only serves GET requests."
    ),
    components(schemas(
        PublicProject,
        PublicScreenshot,
        PublicExperience,
        PublicSkill,
        PublicAchievement,
        PublicCategory,
        PortfolioSummary,
    )),
    tags(
        (name = "projects", description = "Published projects"),
        (name = "experience", description = "Work history"),
        (name = "skills", description = "Skills and proficiency"),
        (name = "achievements", description = "Certifications and awards"),
        (name = "categories", description = "Content categories"),
        (name = "profile", description = "Profile singleton"),
    )
)]
pub struct ApiDoc;
