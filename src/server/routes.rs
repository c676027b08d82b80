//! Ordered route table.
//!
//! Rules are tried in declaration order and the first one whose method and
//! path pattern both match wins. Identifier segments only match decimal
//! digits, so `/artists/abc` falls through every `{id}` rule.

use super::body::RequestBody;
use super::error::ApiError;
use super::handlers::{self, CollectionHandler, HandlerResult, ItemHandler};
use crate::catalog_store::CatalogStore;
use axum::http::Method;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathPattern {
    /// The whole path, e.g. `/artists`.
    Exact(&'static str),
    /// `{prefix}/{id}` optionally followed by `/{suffix}`,
    /// e.g. `/artists/{id}/albums`.
    WithId {
        prefix: &'static str,
        suffix: Option<&'static str>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathMatch {
    Exact,
    WithId(u64),
}

impl PathPattern {
    pub fn match_path(&self, path: &str) -> Option<PathMatch> {
        match *self {
            PathPattern::Exact(literal) => (path == literal).then_some(PathMatch::Exact),
            PathPattern::WithId { prefix, suffix } => {
                match_id_path(path, prefix, suffix).map(PathMatch::WithId)
            }
        }
    }
}

fn match_id_path(path: &str, prefix: &str, suffix: Option<&str>) -> Option<u64> {
    let rest = path.strip_prefix(prefix)?.strip_prefix('/')?;
    let (segment, tail) = match rest.split_once('/') {
        Some((segment, tail)) => (segment, Some(tail)),
        None => (rest, None),
    };
    if tail != suffix {
        return None;
    }
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Too many digits for a u64 can never name a stored record.
    segment.parse().ok()
}

#[derive(Clone, Copy)]
enum RouteHandler {
    Collection(CollectionHandler),
    Item(ItemHandler),
}

pub struct Route {
    pub name: &'static str,
    methods: Vec<Method>,
    pattern: PathPattern,
    handler: RouteHandler,
}

impl Route {
    pub fn exact(
        name: &'static str,
        methods: Vec<Method>,
        path: &'static str,
        handler: CollectionHandler,
    ) -> Route {
        Route {
            name,
            methods,
            pattern: PathPattern::Exact(path),
            handler: RouteHandler::Collection(handler),
        }
    }

    pub fn with_id(
        name: &'static str,
        methods: Vec<Method>,
        prefix: &'static str,
        suffix: Option<&'static str>,
        handler: ItemHandler,
    ) -> Route {
        Route {
            name,
            methods,
            pattern: PathPattern::WithId { prefix, suffix },
            handler: RouteHandler::Item(handler),
        }
    }

    pub fn pattern(&self) -> PathPattern {
        self.pattern
    }

    fn match_request(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        if !self.methods.contains(method) {
            return None;
        }
        let action = match (self.handler, self.pattern.match_path(path)?) {
            (RouteHandler::Collection(handler), PathMatch::Exact) => {
                RouteAction::Collection(handler)
            }
            (RouteHandler::Item(handler), PathMatch::WithId(id)) => RouteAction::Item(handler, id),
            _ => return None,
        };
        Some(RouteMatch {
            route: self,
            action,
        })
    }
}

enum RouteAction {
    Collection(CollectionHandler),
    Item(ItemHandler, u64),
}

/// A rule matched against a request, ready to run.
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    action: RouteAction,
}

impl RouteMatch<'_> {
    pub fn id(&self) -> Option<u64> {
        match self.action {
            RouteAction::Collection(_) => None,
            RouteAction::Item(_, id) => Some(id),
        }
    }

    pub fn run(self, store: &mut CatalogStore, body: Option<&RequestBody>) -> HandlerResult {
        match self.action {
            RouteAction::Collection(handler) => handler(store, body),
            RouteAction::Item(handler, id) => handler(store, id, body),
        }
    }
}

pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> RouteTable {
        RouteTable { routes }
    }

    /// The catalog API, in precedence order.
    pub fn catalog() -> RouteTable {
        use handlers::*;

        let get = || vec![Method::GET];
        let post = || vec![Method::POST];
        let edit = || vec![Method::PUT, Method::PATCH];
        let delete = || vec![Method::DELETE];

        RouteTable::new(vec![
            Route::exact("list_artists", get(), "/artists", list_artists),
            Route::with_id("get_artist", get(), "/artists", None, get_artist),
            Route::exact("create_artist", post(), "/artists", create_artist),
            Route::with_id("edit_artist", edit(), "/artists", None, edit_artist),
            Route::with_id("delete_artist", delete(), "/artists", None, delete_artist),
            Route::with_id(
                "list_artist_albums",
                get(),
                "/artists",
                Some("albums"),
                list_artist_albums,
            ),
            Route::with_id("get_album", get(), "/albums", None, get_album),
            Route::with_id(
                "create_album",
                post(),
                "/artists",
                Some("albums"),
                create_album,
            ),
            Route::with_id("edit_album", edit(), "/albums", None, edit_album),
            Route::with_id("delete_album", delete(), "/albums", None, delete_album),
            Route::with_id(
                "list_artist_songs",
                get(),
                "/artists",
                Some("songs"),
                list_artist_songs,
            ),
            Route::with_id(
                "list_album_songs",
                get(),
                "/albums",
                Some("songs"),
                list_album_songs,
            ),
            Route::with_id(
                "list_track_number_songs",
                get(),
                "/trackNumbers",
                Some("songs"),
                list_track_number_songs,
            ),
            Route::with_id("get_song", get(), "/songs", None, get_song),
            Route::with_id("create_song", post(), "/albums", None, create_song),
            Route::with_id("edit_song", edit(), "/songs", None, edit_song),
            Route::with_id("delete_song", delete(), "/songs", None, delete_song),
        ])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn find(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        self.routes
            .iter()
            .find_map(|route| route.match_request(method, path))
    }

    pub fn dispatch(
        &self,
        store: &mut CatalogStore,
        method: &Method,
        path: &str,
        body: Option<&RequestBody>,
    ) -> HandlerResult {
        match self.find(method, path) {
            Some(route_match) => {
                debug!("{} {} -> {}", method, path, route_match.route.name);
                route_match.run(store, body)
            }
            None => {
                debug!("{} {} matched no route", method, path);
                Err(ApiError::EndpointNotFound)
            }
        }
    }
}
