use axum::Json;
use serde::Serialize;

use crate::proxy::HttpMethod;

/// A ready-made request for the quick-start menu.
#[derive(Debug, Clone, Serialize)]
pub struct SampleApi {
    pub name: &'static str,
    pub url: &'static str,
    pub method: HttpMethod,
}

pub static SAMPLE_APIS: [SampleApi; 5] = [
    SampleApi {
        name: "Random User API",
        url: "https://randomuser.me/api/",
        method: HttpMethod::Get,
    },
    SampleApi {
        name: "JSON Placeholder Posts",
        url: "https://jsonplaceholder.typicode.com/posts",
        method: HttpMethod::Get,
    },
    SampleApi {
        name: "JSON Placeholder Users",
        url: "https://jsonplaceholder.typicode.com/users",
        method: HttpMethod::Get,
    },
    SampleApi {
        name: "Open Weather Map",
        url: "https://api.openweathermap.org/data/2.5/weather?q=London&appid=YOUR_API_KEY",
        method: HttpMethod::Get,
    },
    SampleApi {
        name: "GitHub User",
        url: "https://api.github.com/users/octocat",
        method: HttpMethod::Get,
    },
];

pub async fn list_samples() -> Json<&'static [SampleApi]> {
    Json(&SAMPLE_APIS[..])
}
