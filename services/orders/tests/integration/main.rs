mod helpers;
mod partner_test;
mod router_test;
