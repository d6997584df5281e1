use clap::{Args, Subcommand};

use catalog_app::{
    database::Db,
    domain::products::{ProductsService, SqliteProductsService, data::ProductFilter},
};

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// Print live products, one per line
    List(ListArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Case-sensitive substring of the product code
    #[arg(long)]
    code: Option<String>,

    /// Minimum price, inclusive
    #[arg(long)]
    min_price: Option<String>,
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list(args).await,
    }
}

async fn list(args: ListArgs) -> Result<(), String> {
    let service = SqliteProductsService::new(Db::new(args.database.open().await?));

    let products = service
        .list_products(ProductFilter::from_query(
            args.code.as_deref(),
            args.min_price.as_deref(),
        ))
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    for product in products {
        println!("{}\t{}\t{}", product.id, product.code, product.price);
    }

    Ok(())
}
