pub mod sitemap;
