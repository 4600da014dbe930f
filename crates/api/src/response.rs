//! Success envelope for resource endpoints.
//!
//! Users, catalog rows, watchlist entries, notifications, and catalog proxy
//! results are all returned as `{ "data": ... }`. Auth and `/health` answer
//! with bare objects.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
