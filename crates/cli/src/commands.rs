use crate::{config::FilterConfig, error::CliError, output};
use clap::{Subcommand, ValueEnum};
use planner::{
    ExprFilterFactory, MongoFilterFactory, SqlFilter, SqlFilterFactory,
    query::dialect::{Dialect, MySql, Postgres},
};
use query_syntax::{FilterFactory, QueryCompiler};
use tracing::info;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a filter query and print the resulting constraint
    Compile {
        #[arg(long, help = "Config file path (defaults to $FILTERC_CONFIG)")]
        config: Option<String>,

        #[arg(long, value_enum, default_value_t = Backend::Ast)]
        backend: Backend,

        #[arg(long, value_enum, default_value_t = SqlDialect::Postgres)]
        dialect: SqlDialect,

        #[arg(long, help = "Print JSON instead of text")]
        json: bool,

        /// The filter query, e.g. `name:bob or age>30`
        query: String,
    },
    /// List the field paths queries may compare against
    Fields {
        #[arg(long, help = "Config file path (defaults to $FILTERC_CONFIG)")]
        config: Option<String>,

        #[arg(long, default_value_t = 2, help = "How many references to follow")]
        depth: usize,

        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },
    /// List the `||type:value||` tag types the configuration registers
    Tags {
        #[arg(long, help = "Config file path (defaults to $FILTERC_CONFIG)")]
        config: Option<String>,

        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Backend-neutral constraint tree
    Ast,
    /// Parameterized SQL condition
    Sql,
    /// MongoDB query document
    Mongo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SqlDialect {
    Postgres,
    Mysql,
}

impl SqlDialect {
    fn dialect(self) -> &'static dyn Dialect {
        match self {
            SqlDialect::Postgres => &Postgres,
            SqlDialect::Mysql => &MySql,
        }
    }
}

/// Compiles `query` and renders it for `backend`.
pub fn compile(
    config: &FilterConfig,
    query: &str,
    backend: Backend,
    dialect: SqlDialect,
    json: bool,
) -> Result<String, CliError> {
    info!("Compiling query for the {:?} backend", backend);

    match backend {
        Backend::Ast => {
            let expr = compile_with(config, &ExprFilterFactory, query)?;
            output::render_expr(expr.as_ref(), json)
        }
        Backend::Sql => {
            let expr = compile_with(config, &SqlFilterFactory, query)?;
            let filter = expr.map(|expr| SqlFilter::render(&expr, dialect.dialect()));
            output::render_sql(filter.as_ref(), json)
        }
        Backend::Mongo => {
            let document = compile_with(config, &MongoFilterFactory, query)?;
            output::render_mongo(document.as_ref())
        }
    }
}

/// Lists the field paths of the root entity.
pub fn fields(config: &FilterConfig, depth: usize, json: bool) -> Result<String, CliError> {
    let root = config.root_entity()?;
    output::render_list(root.field_paths(depth).as_slice(), json)
}

/// Lists the registered tag types, lowercased and sorted.
pub fn tags(config: &FilterConfig, json: bool) -> Result<String, CliError> {
    let registry = config.tag_registry::<ExprFilterFactory>();
    output::render_list(registry.tag_types().as_slice(), json)
}

fn compile_with<F: FilterFactory>(
    config: &FilterConfig,
    factory: &F,
    query: &str,
) -> Result<Option<F::Constraint>, CliError> {
    let root = config.root_entity()?;
    let tags = config.tag_registry::<F>();

    let constraint = QueryCompiler::new(factory, &root, query, &config.search_fields)
        .with_tags(&tags)
        .compile()?;
    Ok(constraint)
}
