// Fixed values shared by the views and the content loaders.

/// main.rs expects: <div id="app"></div>
pub const APP_ROOT_ID: &str = "app";

/// SessionStorage key holding the last visited view.
pub const ROUTE_STORAGE_KEY: &str = "route";

pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Direct media files the browser can play in a native <video> element.
pub const NATIVE_VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".webm", ".ogg"];

pub const PLACEHOLDER_DESCRIPTION: &str =
    "Completar con explicación de la actividad (objetivo, pasos y cierre).";
