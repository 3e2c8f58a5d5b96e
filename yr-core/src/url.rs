use crate::coords::Coordinate;

/// Compact location forecast endpoint. The query string is appended directly.
pub const BASE_URL: &str = "https://api.met.no/weatherapi/locationforecast/2.0/compact.json?";

/// Build the request URL for `coord` against the public endpoint.
///
/// yr.no expects `...compact.json?altitude=X&lat=Y&lon=Z`.
pub fn build_request_url(coord: &Coordinate) -> String {
    build_request_url_with_base(BASE_URL, coord)
}

/// Same as [`build_request_url`], for a base that already ends in `?`.
pub fn build_request_url_with_base(base: &str, coord: &Coordinate) -> String {
    format!(
        "{base}altitude={}&lat={:.6}&lon={:.6}",
        coord.altitude(),
        coord.latitude(),
        coord.longitude(),
    )
}
