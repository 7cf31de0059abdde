//! Demo application routes.
//!
//! Users and their addresses, served as plain text. Every route is metered;
//! the welcome, about and address lookup routes are also access-logged.

use axum::http::Method;

use crate::routing::{Handler, Logged, Metered, RequestContext, RouteTable};

/// Build the table with every demo route registered.
pub fn routes() -> RouteTable {
    let mut table = RouteTable::new();

    table.get("/", Logged::new(metered("/", welcome)));
    table.get("/about", Logged::new(metered("/about", about)));
    table.get("/users/:id", metered("/users/:id", retrieve_user));
    table.get(
        "/users/:user_id/addresses/:address_id",
        Logged::new(metered(
            "/users/:user_id/addresses/:address_id",
            retrieve_address,
        )),
    );
    table.register(Method::POST, "/users", metered("/users", create_user));
    table.register(
        Method::POST,
        "/users/:user_id/addresses",
        metered("/users/:user_id/addresses", create_address),
    );

    table
}

fn metered<H: Handler>(route: &str, handler: H) -> Metered<H> {
    Metered::new(route, handler)
}

fn param(ctx: &RequestContext, name: &str) -> String {
    ctx.param(name).unwrap_or_default().to_owned()
}

fn welcome(ctx: &mut RequestContext) {
    writeln!(ctx.response, "welcome!");
}

fn about(ctx: &mut RequestContext) {
    writeln!(ctx.response, "about");
}

fn retrieve_user(ctx: &mut RequestContext) {
    let id = param(ctx, "id");
    writeln!(ctx.response, "retrieve user {id}");
}

fn retrieve_address(ctx: &mut RequestContext) {
    let user_id = param(ctx, "user_id");
    let address_id = param(ctx, "address_id");
    writeln!(ctx.response, "retrieve user {user_id}'s address {address_id}");
}

fn create_user(ctx: &mut RequestContext) {
    writeln!(ctx.response, "create user");
}

fn create_address(ctx: &mut RequestContext) {
    let user_id = param(ctx, "user_id");
    writeln!(ctx.response, "create user {user_id}'s address");
}
