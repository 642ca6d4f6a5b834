use crate::{handler, model}; // Import necessary modules
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        handler::analyze_handler,
    ),
    components(
        schemas(
            model::AnalysisRequest,
            model::AnalysisResponse,
            model::StatsResponse,
            model::ErrorResponse
        )
    ),
    tags(
        (name = "Matrix Analysis", description = "Descriptive statistics over the Q and R factors of a decomposition")
    ),
    info(
        title = "Matrix Statistics API",
        version = "0.1.0",
        description = "Receives the Q, R and rotated matrices produced upstream and reports max, min, sum, average and diagonality for Q and R.",
        license(
            name = "MIT/Apache-2.0",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
