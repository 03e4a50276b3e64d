//! PTV Timetable API client.
//!
//! Every request is signed, sent once, and either handed back raw
//! ([`PtvClient::call`]) or decoded and projected into domain types.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, instrument};

use crate::api::{
    DirectionsResponse, PatternResponse, RouteTypesResponse, RoutesResponse, RunsResponse,
    StopsResponse, decode, project_directions, project_pattern, project_route_types,
    project_routes, project_runs, project_stops,
};
use crate::config::{ClientConfig, Credentials};
use crate::domain::{
    DirectionId, Directions, PatternStop, RouteId, RouteNumber, RouteSummary, RouteTypeId,
    RouteTypes, RoutesByType, RunRef, Runs, Stop,
};
use crate::signing::{Query, UrlBuilder};
use crate::transport::{HttpTransport, Transport};

use super::error::ApiError;

/// The only status a strict call accepts.
const STATUS_OK: u16 = 200;

/// How much of an undecodable body to keep in the error.
const BODY_SNIPPET_CHARS: usize = 500;

/// A raw API response: status code and decoded JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The body pretty-printed with four-space indentation.
    pub fn pretty_body(&self) -> Result<String, serde_json::Error> {
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        self.body.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

/// Which route types a routes listing covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RouteTypeFilter {
    /// No filter: routes of every type.
    #[default]
    All,
    Single(RouteTypeId),
    Many(Vec<RouteTypeId>),
}

impl RouteTypeFilter {
    fn ids(&self) -> &[RouteTypeId] {
        match self {
            RouteTypeFilter::All => &[],
            RouteTypeFilter::Single(id) => std::slice::from_ref(id),
            RouteTypeFilter::Many(ids) => ids,
        }
    }
}

impl From<RouteTypeId> for RouteTypeFilter {
    fn from(id: RouteTypeId) -> Self {
        RouteTypeFilter::Single(id)
    }
}

impl From<Vec<RouteTypeId>> for RouteTypeFilter {
    fn from(ids: Vec<RouteTypeId>) -> Self {
        RouteTypeFilter::Many(ids)
    }
}

impl From<Option<RouteTypeId>> for RouteTypeFilter {
    fn from(id: Option<RouteTypeId>) -> Self {
        id.map_or(RouteTypeFilter::All, RouteTypeFilter::Single)
    }
}

/// PTV Timetable API client.
///
/// Holds the signing state and a transport; nothing is mutated after
/// construction, so a client can be shared between threads whenever its
/// transport can.
#[derive(Debug, Clone)]
pub struct PtvClient<T = HttpTransport> {
    transport: T,
    urls: UrlBuilder,
}

impl PtvClient<HttpTransport> {
    /// Create a client that talks to the API over HTTP.
    pub fn new(credentials: &Credentials, config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(config)?;
        Self::with_transport(credentials, config, transport)
    }
}

impl<T: Transport> PtvClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(
        credentials: &Credentials,
        config: &ClientConfig,
        transport: T,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            transport,
            urls: UrlBuilder::new(credentials, config)?,
        })
    }

    /// The fully qualified, signed URL for a query.
    pub fn signed_url(&self, query: &Query) -> Result<String, ApiError> {
        Ok(self.urls.build(query)?)
    }

    /// Send a signed GET for `query` and return the status and JSON body.
    ///
    /// With `strict`, any status other than 200 fails with
    /// [`ApiError::UnexpectedStatus`] carrying the raw body. Without it the
    /// status is returned as-is for the caller to interpret. A body that is
    /// not JSON fails with [`ApiError::Decode`]. There are no retries.
    #[instrument(skip(self), fields(path = query.path()))]
    pub fn call(&self, query: &Query, strict: bool) -> Result<ApiResponse, ApiError> {
        let url = self.signed_url(query)?;
        debug!(%url, "sending request");

        let response = self.transport.get(&url)?;
        debug!(status = response.status, "received response");

        if strict && response.status != STATUS_OK {
            return Err(ApiError::UnexpectedStatus {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let body = serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode {
            message: e.to_string(),
            body: String::from_utf8_lossy(&response.body)
                .chars()
                .take(BODY_SNIPPET_CHARS)
                .collect(),
        })?;

        Ok(ApiResponse {
            status: response.status,
            body,
        })
    }

    fn fetch<D: DeserializeOwned>(&self, query: &Query) -> Result<D, ApiError> {
        let response = self.call(query, true)?;
        Ok(decode(&response.body)?)
    }

    /// All transport modes, keyed by route type ID.
    pub fn route_types(&self) -> Result<RouteTypes, ApiError> {
        let response: RouteTypesResponse = self.fetch(&Query::new("/route_types"))?;
        Ok(project_route_types(&response))
    }

    /// Look up the name of one route type.
    pub fn route_type_name(&self, id: RouteTypeId) -> Result<Option<String>, ApiError> {
        Ok(self.route_types()?.name(id).map(str::to_string))
    }

    /// Routes grouped by route type, optionally filtered to some types.
    pub fn routes(&self, filter: &RouteTypeFilter) -> Result<RoutesByType, ApiError> {
        let mut query = Query::new("/routes");
        for id in filter.ids() {
            query.push("route_types", id);
        }
        let response: RoutesResponse = self.fetch(&query)?;
        Ok(project_routes(&response))
    }

    /// Directions of travel on a route.
    pub fn directions(&self, route: RouteId) -> Result<Directions, ApiError> {
        let response: DirectionsResponse =
            self.fetch(&Query::new(format!("/directions/route/{route}")))?;
        Ok(project_directions(&response))
    }

    /// Stops on a route.
    ///
    /// With a direction, stops come back in travel order; without one, in
    /// the API's own order.
    pub fn stops(
        &self,
        route: RouteId,
        route_type: RouteTypeId,
        direction: Option<DirectionId>,
    ) -> Result<Vec<Stop>, ApiError> {
        let mut query = Query::new(format!("/stops/route/{route}/route_type/{route_type}"));
        if let Some(direction) = direction {
            query.push("direction_id", direction);
        }
        let response: StopsResponse = self.fetch(&query)?;
        Ok(project_stops(&response, direction))
    }

    /// Runs of a route, keyed by run reference.
    pub fn runs(&self, route: RouteId, route_type: RouteTypeId) -> Result<Runs, ApiError> {
        let response: RunsResponse = self.fetch(&Query::new(format!(
            "/runs/route/{route}/route_type/{route_type}"
        )))?;
        Ok(project_runs(&response))
    }

    /// The chronological stopping pattern of a run.
    ///
    /// Without `include_skipped` the API is not asked for skipped stops at
    /// all, so only serviced stops appear.
    pub fn stopping_pattern(
        &self,
        run: &RunRef,
        route_type: RouteTypeId,
        include_skipped: bool,
    ) -> Result<Vec<PatternStop>, ApiError> {
        let mut query = Query::new(format!("/pattern/run/{run}/route_type/{route_type}"))
            .param("expand", "Stop");
        if include_skipped {
            query.push("include_skipped_stops", true);
        }
        let response: PatternResponse = self.fetch(&query)?;
        Ok(project_pattern(&response, include_skipped)?)
    }

    /// Find a route of the given type by its printed number.
    ///
    /// Matching is type-sensitive: `96` only finds a route numbered with
    /// the integer 96, `"96"` only one whose number stayed a string. The
    /// first match in listing order wins; `None` means no route matched.
    pub fn search_route_by_number(
        &self,
        number: impl Into<RouteNumber>,
        route_type: RouteTypeId,
    ) -> Result<Option<RouteSummary>, ApiError> {
        let number = number.into();
        let routes = self.routes(&RouteTypeFilter::Single(route_type))?;
        let found = routes.find_by_number(route_type, &number);
        debug!(%number, %route_type, found = found.is_some(), "route search");
        Ok(found.map(|route| route.summary()))
    }
}
