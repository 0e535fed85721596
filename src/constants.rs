pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8080;
    pub const ALLOWED_ORIGINS: [&str; 2] = [
        "http://localhost:5173",
        "https://bookmarks-web-qbt.pages.dev",
    ];
    pub const PREVIEW_SUFFIX: &str = ".bookmarks-web-qbt.pages.dev";
    pub const GREETING: &str = "Hello!";
}
