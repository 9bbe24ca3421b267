use actix_web::HttpResponse;

/// Product feature shown on the landing page
#[derive(Debug, serde::Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Headline performance figures
#[derive(Debug, serde::Serialize)]
pub struct PerformanceMetrics {
    pub query_response: &'static str,
    pub cache_hit_rate: &'static str,
    pub latency_reduction: &'static str,
    pub data_processed: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🔗",
        title: "Unified Caching Layer",
        description: "Seamlessly integrates database caching with LLM KV caching in a single, cohesive system",
    },
    Feature {
        icon: "🗄️",
        title: "Database Service Integration",
        description: "Optimized caching for various database engines including SQL, NoSQL, and time-series databases",
    },
    Feature {
        icon: "🤖",
        title: "LLM KV Cache",
        description: "Dedicated key-value caching optimized for Large Language Model inference and training",
    },
    Feature {
        icon: "⚡",
        title: "Query Optimization",
        description: "Intelligent query planning and execution optimization for each connected engine",
    },
    Feature {
        icon: "📊",
        title: "Real-time Analytics",
        description: "Comprehensive monitoring and analytics dashboard for cache performance and hit rates",
    },
    Feature {
        icon: "🔒",
        title: "Enterprise Security",
        description: "Built-in encryption, access controls, and compliance features for enterprise deployments",
    },
];

pub const PERFORMANCE: PerformanceMetrics = PerformanceMetrics {
    query_response: "5x",
    cache_hit_rate: "90%",
    latency_reduction: "50%",
    data_processed: "10TB+",
};

/// Features handler
pub async fn features() -> HttpResponse {
    HttpResponse::Ok().json(&FEATURES)
}

/// Performance handler
pub async fn performance() -> HttpResponse {
    HttpResponse::Ok().json(&PERFORMANCE)
}
