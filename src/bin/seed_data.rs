//! Seed data script - populates the database with bilingual demo data
//!
//! Run with: cargo run --bin seed-data
//!
//! This creates:
//! - 6 service categories (English + Telugu names)
//! - 6 providers across L.B. Nagar and B.N. Reddy
//! - Service listings for each provider
//! - A small furniture catalog

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, Set};
use std::time::Duration;
use tracing::info;

use ibuildz_api::entities::{
    furniture_product, service, service_category, service_provider,
    user::{self, UserRole},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("=== iBuildz Seed Data ===");
    info!("Creating bilingual demo data for exploration...\n");

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://ibuildz.db?mode=rwc".to_string());

    let mut options = ConnectOptions::new(database_url.clone());
    options
        .max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10));

    info!("Connecting to database: {}", database_url);
    let db = Database::connect(options).await?;
    ibuildz_api::db::run_migrations(&db).await?;
    info!("Connected!\n");

    info!("Creating provider accounts...");
    let owners = create_provider_users(&db).await?;
    info!("  Created {} accounts", owners.len());

    info!("Creating service categories...");
    let categories = create_categories(&db).await?;
    info!("  Created {} categories", categories.len());

    info!("Creating providers...");
    let providers = create_providers(&db, &owners, &categories).await?;
    info!("  Created {} providers", providers.len());

    info!("Creating services...");
    let service_count = create_services(&db, &providers, &categories).await?;
    info!("  Created {} services", service_count);

    info!("Creating furniture products...");
    let product_count = create_furniture(&db, &providers).await?;
    info!("  Created {} products", product_count);

    info!("\n=== Seed Data Complete ===");
    info!("Try these API calls:");
    info!("  curl http://localhost:5000/api/service-categories");
    info!("  curl 'http://localhost:5000/api/service-providers?location=L.B.%20Nagar'");
    info!("  curl 'http://localhost:5000/api/search/services?q=modular'");
    info!("  curl http://localhost:5000/api/furniture-products");
    info!("");
    info!("Or explore interactively at: http://localhost:5000/swagger-ui");

    Ok(())
}

async fn create_provider_users(
    db: &sea_orm::DatabaseConnection,
) -> anyhow::Result<Vec<user::Model>> {
    let users_data = vec![
        ("seed-provider-1", "ravi@srisaibuilders.in", "Ravi", "Kumar"),
        ("seed-provider-2", "lakshmi@lakshmiinteriors.in", "Lakshmi", "Devi"),
        ("seed-provider-3", "venkat@venkatplumbing.in", "Venkatesh", "Rao"),
        ("seed-provider-4", "suresh@sureshelectricals.in", "Suresh", "Goud"),
        ("seed-provider-5", "anand@anandwoodworks.in", "Anand", "Reddy"),
        ("seed-provider-6", "padma@padmafurnishings.in", "Padma", "Sri"),
    ];

    let mut created = Vec::new();
    let now = Utc::now();

    for (id, email, first_name, last_name) in users_data {
        let account = user::ActiveModel {
            id: Set(id.to_string()),
            email: Set(Some(email.to_string())),
            first_name: Set(Some(first_name.to_string())),
            last_name: Set(Some(last_name.to_string())),
            profile_image_url: Set(None),
            role: Set(UserRole::Merchant),
            phone: Set(None),
            location: Set(None),
            language: Set("te".to_string()),
            created_at: Set(now),
            updated_at: Set(Some(now)),
        };

        created.push(account.insert(db).await?);
    }

    Ok(created)
}

async fn create_categories(
    db: &sea_orm::DatabaseConnection,
) -> anyhow::Result<Vec<service_category::Model>> {
    let categories_data = vec![
        (
            "Construction",
            "నిర్మాణం",
            "Full house construction from foundation to finishing",
            "పునాది నుండి ఫినిషింగ్ వరకు పూర్తి ఇంటి నిర్మాణం",
            "hard-hat",
        ),
        (
            "Interior Design",
            "ఇంటీరియర్ డిజైన్",
            "Complete interiors: false ceilings, modular kitchens, wardrobes",
            "పూర్తి ఇంటీరియర్స్: ఫాల్స్ సీలింగ్, మాడ్యులర్ కిచెన్, వార్డ్‌రోబ్స్",
            "sofa",
        ),
        (
            "Plumbing",
            "ప్లంబింగ్",
            "Pipelines, bathroom fittings, leak repairs",
            "పైప్‌లైన్లు, బాత్రూమ్ ఫిట్టింగ్స్, లీక్ రిపేర్లు",
            "wrench",
        ),
        (
            "Electrical",
            "ఎలక్ట్రికల్",
            "Wiring, panel boards, appliance installation",
            "వైరింగ్, ప్యానెల్ బోర్డులు, ఉపకరణాల అమరిక",
            "zap",
        ),
        (
            "Carpentry",
            "వడ్రంగి పని",
            "Custom woodwork, doors, windows and furniture repair",
            "కస్టమ్ చెక్క పని, తలుపులు, కిటికీలు మరియు ఫర్నిచర్ మరమ్మతు",
            "hammer",
        ),
        (
            "Painting",
            "పెయింటింగ్",
            "Interior and exterior painting, texture finishes",
            "లోపలి మరియు బయటి పెయింటింగ్, టెక్చర్ ఫినిషింగ్",
            "paintbrush",
        ),
    ];

    let mut created = Vec::new();
    let now = Utc::now();

    for (name, name_te, description, description_te, icon) in categories_data {
        let category = service_category::ActiveModel {
            name: Set(name.to_string()),
            name_te: Set(Some(name_te.to_string())),
            description: Set(Some(description.to_string())),
            description_te: Set(Some(description_te.to_string())),
            icon: Set(Some(icon.to_string())),
            is_active: Set(true),
            created_at: Set(now),
            ..Default::default()
        };

        created.push(category.insert(db).await?);
    }

    Ok(created)
}

async fn create_providers(
    db: &sea_orm::DatabaseConnection,
    owners: &[user::Model],
    categories: &[service_category::Model],
) -> anyhow::Result<Vec<service_provider::Model>> {
    let providers_data = vec![
        (
            "Sri Sai Builders",
            "శ్రీ సాయి బిల్డర్స్",
            "Residential construction with 15 years in L.B. Nagar. Slab to key handover.",
            "L.B. Nagar",
            "+91 98490 11111",
            0usize, // Construction
            15,
        ),
        (
            "Lakshmi Interiors",
            "లక్ష్మి ఇంటీరియర్స్",
            "Modular kitchens, false ceilings and complete home interiors.",
            "L.B. Nagar",
            "+91 98490 22222",
            1, // Interior Design
            8,
        ),
        (
            "Venkat Plumbing Works",
            "వెంకట్ ప్లంబింగ్ వర్క్స్",
            "Bathroom fittings, bore connections and 24x7 leak repair.",
            "B.N. Reddy",
            "+91 98490 33333",
            2, // Plumbing
            12,
        ),
        (
            "Suresh Electricals",
            "సురేష్ ఎలక్ట్రికల్స్",
            "House wiring, meter boards and inverter installation.",
            "B.N. Reddy",
            "+91 98490 44444",
            3, // Electrical
            10,
        ),
        (
            "Anand Wood Works",
            "ఆనంద్ వుడ్ వర్క్స్",
            "Teak doors, window frames and custom wardrobes.",
            "L.B. Nagar",
            "+91 98490 55555",
            4, // Carpentry
            20,
        ),
        (
            "Padma Furnishings",
            "పద్మ ఫర్నిషింగ్స్",
            "Ready-made and made-to-order furniture showroom.",
            "B.N. Reddy",
            "+91 98490 66666",
            4, // Carpentry
            6,
        ),
    ];

    let mut created = Vec::new();
    let now = Utc::now();

    for (i, (name, name_te, description, location, phone, category_idx, experience)) in
        providers_data.into_iter().enumerate()
    {
        let provider = service_provider::ActiveModel {
            user_id: Set(owners[i].id.clone()),
            business_name: Set(name.to_string()),
            business_name_te: Set(Some(name_te.to_string())),
            description: Set(Some(description.to_string())),
            description_te: Set(None),
            category_id: Set(Some(categories[category_idx].id)),
            location: Set(location.to_string()),
            phone: Set(phone.to_string()),
            email: Set(owners[i].email.clone()),
            website: Set(None),
            experience: Set(Some(experience)),
            rating: Set(Decimal::ZERO),
            review_count: Set(0),
            is_verified: Set(true),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(Some(now)),
            ..Default::default()
        };

        created.push(provider.insert(db).await?);
    }

    Ok(created)
}

async fn create_services(
    db: &sea_orm::DatabaseConnection,
    providers: &[service_provider::Model],
    categories: &[service_category::Model],
) -> anyhow::Result<usize> {
    use ibuildz_api::entities::service::PriceUnit;

    let services_data = vec![
        (
            0usize,
            0usize,
            "Duplex House Construction",
            "డూప్లెక్స్ ఇంటి నిర్మాణం",
            "Complete duplex construction including structure, plastering and finishing.",
            Some(dec!(1850)),
            PriceUnit::PerSqft,
            vec!["RCC frame structure", "Branded cement and steel", "1 year workmanship warranty"],
        ),
        (
            1,
            1,
            "Modular Kitchen Package",
            "మాడ్యులర్ కిచెన్ ప్యాకేజీ",
            "L-shaped modular kitchen with soft-close hardware and granite top.",
            Some(dec!(145000)),
            PriceUnit::PerProject,
            vec!["Marine ply carcass", "Soft-close hinges", "5 year hardware warranty"],
        ),
        (
            1,
            1,
            "False Ceiling with LED",
            "LED తో ఫాల్స్ సీలింగ్",
            "Gypsum false ceiling with cove lighting, per square foot.",
            Some(dec!(85)),
            PriceUnit::PerSqft,
            vec!["Saint-Gobain gypsum", "Concealed LED strips"],
        ),
        (
            2,
            2,
            "Bathroom Plumbing Renovation",
            "బాత్రూమ్ ప్లంబింగ్ పునరుద్ధరణ",
            "Replace concealed lines, fittings and fixtures for one bathroom.",
            Some(dec!(22000)),
            PriceUnit::PerProject,
            vec!["CPVC lines", "ISI fittings"],
        ),
        (
            3,
            3,
            "Full House Wiring",
            "పూర్తి ఇంటి వైరింగ్",
            "Concealed copper wiring for a 2BHK with modular switches.",
            Some(dec!(48000)),
            PriceUnit::PerProject,
            vec!["Finolex wires", "Modular switch boards", "MCB panel"],
        ),
        (
            4,
            4,
            "Teak Main Door",
            "టేకు ప్రధాన తలుపు",
            "Hand-carved Burma teak main door with frame and polish.",
            Some(dec!(65000)),
            PriceUnit::PerProject,
            vec!["Burma teak", "Melamine polish"],
        ),
    ];

    let now = Utc::now();
    let mut count = 0;

    for (provider_idx, category_idx, title, title_te, description, price, price_unit, features) in
        services_data
    {
        let listing = service::ActiveModel {
            provider_id: Set(Some(providers[provider_idx].id)),
            category_id: Set(Some(categories[category_idx].id)),
            title: Set(title.to_string()),
            title_te: Set(Some(title_te.to_string())),
            description: Set(Some(description.to_string())),
            description_te: Set(None),
            price: Set(price),
            price_unit: Set(price_unit),
            images: Set(None),
            features: Set(Some(serde_json::json!(features))),
            features_te: Set(None),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(Some(now)),
            ..Default::default()
        };

        listing.insert(db).await?;
        count += 1;
    }

    Ok(count)
}

async fn create_furniture(
    db: &sea_orm::DatabaseConnection,
    providers: &[service_provider::Model],
) -> anyhow::Result<usize> {
    let products_data = vec![
        (
            5usize,
            "Sheesham 3-Seater Sofa",
            "షీషం 3-సీటర్ సోఫా",
            "Solid sheesham frame with premium fabric cushions.",
            "sofa",
            dec!(32000),
            Some(dec!(28500)),
            vec!["sheesham", "fabric"],
            vec!["walnut", "honey"],
            8,
        ),
        (
            5,
            "6-Door Wardrobe",
            "6-తలుపుల వార్డ్‌రోబ్",
            "Floor-to-ceiling wardrobe with mirror panels and loft.",
            "wardrobe",
            dec!(54000),
            None,
            vec!["plywood", "laminate"],
            vec!["white", "wenge"],
            3,
        ),
        (
            4,
            "Teak Dining Table (6 Seater)",
            "టేకు డైనింగ్ టేబుల్ (6 సీట్లు)",
            "Burma teak dining set with cushioned chairs.",
            "dining",
            dec!(78000),
            Some(dec!(72000)),
            vec!["teak"],
            vec!["natural"],
            2,
        ),
        (
            5,
            "Queen Size Cot with Storage",
            "స్టోరేజీతో క్వీన్ సైజ్ మంచం",
            "Hydraulic storage cot in engineered wood.",
            "bed",
            dec!(26500),
            None,
            vec!["engineered wood"],
            vec!["oak", "walnut"],
            12,
        ),
        (
            4,
            "Carved Pooja Mandir",
            "చెక్కిన పూజ మందిరం",
            "Traditional carved mandir unit in seasoned teak.",
            "pooja",
            dec!(18500),
            None,
            vec!["teak"],
            vec!["natural"],
            5,
        ),
    ];

    let now = Utc::now();
    let mut count = 0;

    for (
        provider_idx,
        name,
        name_te,
        description,
        category,
        price,
        discount_price,
        materials,
        colors,
        stock_quantity,
    ) in products_data
    {
        let product = furniture_product::ActiveModel {
            provider_id: Set(Some(providers[provider_idx].id)),
            name: Set(name.to_string()),
            name_te: Set(Some(name_te.to_string())),
            description: Set(Some(description.to_string())),
            description_te: Set(None),
            category: Set(category.to_string()),
            price: Set(price),
            discount_price: Set(discount_price),
            images: Set(None),
            materials: Set(Some(serde_json::json!(materials))),
            dimensions: Set(None),
            colors: Set(Some(serde_json::json!(colors))),
            in_stock: Set(true),
            stock_quantity: Set(stock_quantity),
            rating: Set(Decimal::ZERO),
            review_count: Set(0),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(Some(now)),
            ..Default::default()
        };

        product.insert(db).await?;
        count += 1;
    }

    Ok(count)
}
