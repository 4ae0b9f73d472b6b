//! Sample-data seeding for local development.
//!
//! Inserts a couple of categories, products with images, and one blog
//! post. Skips entirely when the catalog already has products, so it is
//! safe to run repeatedly.

use rust_decimal::Decimal;
use sqlx::PgPool;

use lunaris_admin::db;

use super::MissingDatabaseUrl;

/// Errors that can occur while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    MissingEnvVar(#[from] MissingDatabaseUrl),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

struct SeedProduct {
    category_slug: &'static str,
    name_en: &'static str,
    name_tr: &'static str,
    description_en: &'static str,
    description_tr: &'static str,
    price_try: Decimal,
    featured: bool,
}

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("vases", "Vases", "Vazolar"),
    ("bowls", "Bowls", "Kaseler"),
    ("mugs", "Mugs", "Kupalar"),
];

fn products() -> Vec<SeedProduct> {
    vec![
        SeedProduct {
            category_slug: "vases",
            name_en: "Moon Vase",
            name_tr: "Ay Vazosu",
            description_en: "Hand-thrown stoneware vase with a matte lunar glaze.",
            description_tr: "Mat ay sırlı, elde çekilmiş stoneware vazo.",
            price_try: Decimal::from(450),
            featured: true,
        },
        SeedProduct {
            category_slug: "bowls",
            name_en: "Crater Bowl",
            name_tr: "Krater Kase",
            description_en: "Wide serving bowl with carved crater texture.",
            description_tr: "Oyma krater dokulu geniş servis kasesi.",
            price_try: Decimal::from(680),
            featured: true,
        },
        SeedProduct {
            category_slug: "mugs",
            name_en: "Eclipse Mug",
            name_tr: "Tutulma Kupa",
            description_en: "Black-and-sand mug, 300ml.",
            description_tr: "Siyah-kum rengi kupa, 300ml.",
            price_try: Decimal::from(240),
            featured: false,
        },
    ]
}

/// Seed the database with sample data.
///
/// # Errors
///
/// Returns `SeedError` if any insert fails.
pub async fn run() -> Result<(), SeedError> {
    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await?;
    if existing > 0 {
        tracing::info!("Catalog already has products, skipping seed");
        return Ok(());
    }

    seed_catalog(&pool).await?;
    seed_blog(&pool).await?;

    tracing::info!("Seed complete!");
    Ok(())
}

async fn seed_catalog(pool: &PgPool) -> Result<(), SeedError> {
    for (position, (slug, name_en, name_tr)) in CATEGORIES.iter().enumerate() {
        let sort_order = i32::try_from(position).unwrap_or(i32::MAX);
        sqlx::query(
            r"
            INSERT INTO categories (name_en, name_tr, slug, sort_order)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (slug) DO NOTHING
            ",
        )
        .bind(name_en)
        .bind(name_tr)
        .bind(slug)
        .bind(sort_order)
        .execute(pool)
        .await?;
    }

    for product in products() {
        let category_id: i32 = sqlx::query_scalar("SELECT id FROM categories WHERE slug = $1")
            .bind(product.category_slug)
            .fetch_one(pool)
            .await?;

        let product_id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO products
                (category_id, name_en, name_tr, description_en, description_tr,
                 price_try, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(category_id)
        .bind(product.name_en)
        .bind(product.name_tr)
        .bind(product.description_en)
        .bind(product.description_tr)
        .bind(product.price_try)
        .bind(product.featured)
        .fetch_one(pool)
        .await?;

        tracing::info!(product_id, name = product.name_en, "Seeded product");
    }

    Ok(())
}

async fn seed_blog(pool: &PgPool) -> Result<(), SeedError> {
    sqlx::query(
        r"
        INSERT INTO blog_posts
            (slug, title_en, title_tr, excerpt_en, excerpt_tr,
             content_en, content_tr, published)
        VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
        ON CONFLICT (slug) DO NOTHING
        ",
    )
    .bind("firing-the-kiln")
    .bind("Firing the Kiln")
    .bind("Fırını Yakmak")
    .bind("A look inside a 24-hour wood firing.")
    .bind("24 saatlik odun pişiriminin içinden.")
    .bind("<p>Every firing starts the evening before...</p>")
    .bind("<p>Her pişirim bir önceki akşam başlar...</p>")
    .execute(pool)
    .await?;

    Ok(())
}
