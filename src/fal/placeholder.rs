use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::models::GenerationRequest;

/// Build an inline SVG placeholder so the frontend can be exercised without
/// an upstream credential or network access.
pub fn placeholder_data_url(request: &GenerationRequest) -> String {
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="1024" height="768"><rect width="100%" height="100%" fill="#1e1e2f"/><text x="50%" y="50%" fill="#ffd166" font-size="36" text-anchor="middle" dominant-baseline="central">Placeholder: {} {}</text></svg>"##,
        request.emotion, request.style
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
