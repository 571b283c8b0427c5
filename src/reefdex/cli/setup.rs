use clap::{Args, Parser, Subcommand};
use reefdex::model::{SizeBucket, Trait, Zone};
use reefdex::query::Query;

#[derive(Parser, Debug)]
#[command(name = "reefdex", bin_name = "reefdex", version)]
#[command(
    about = "Search the reef card encyclopedia by text, icons and facets",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Facet toggles shared by the query commands. Everything is allowed unless a flag says otherwise.
#[derive(Args, Debug, Clone, Default)]
pub struct FacetArgs {
    /// Hide cards of this group (main, starter)
    #[arg(long = "exclude-group", value_name = "GROUP")]
    pub exclude_group: Vec<String>,

    /// Hide cards of this size (small, medium, large)
    #[arg(long = "exclude-size", value_name = "SIZE")]
    pub exclude_size: Vec<SizeBucket>,

    /// Hide cards living in this zone (sunlight, twilight, midnight)
    #[arg(long = "forbid-zone", value_name = "ZONE")]
    pub forbid_zone: Vec<Zone>,

    /// Only show cards with this trait
    #[arg(long = "require", value_name = "TRAIT")]
    pub require: Vec<Trait>,
}

impl FacetArgs {
    pub fn is_empty(&self) -> bool {
        self.exclude_group.is_empty()
            && self.exclude_size.is_empty()
            && self.forbid_zone.is_empty()
            && self.require.is_empty()
    }

    pub fn to_query(&self, text: Option<String>) -> Query {
        let mut query = Query::default().with_text(text.unwrap_or_default());
        for group in &self.exclude_group {
            query = query.with_group(group.as_str(), false);
        }
        for bucket in &self.exclude_size {
            query = query.with_size(*bucket, false);
        }
        for zone in &self.forbid_zone {
            query = query.with_zone(*zone, false);
        }
        for t in &self.require {
            query = query.with_tag(*t, true);
        }
        query
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cards (default)
    #[command(alias = "ls", display_order = 1)]
    List {
        #[command(flatten)]
        facets: FacetArgs,
    },

    /// Search cards by text and icon tokens, e.g. "[Predator] shark"
    #[command(alias = "s", display_order = 2)]
    Search {
        text: Option<String>,

        #[command(flatten)]
        facets: FacetArgs,
    },

    /// Show one or more cards in full
    #[command(alias = "v", display_order = 3)]
    View {
        /// Card ids (e.g. 3 or #3)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Interactive search reading edits from stdin
    #[command(display_order = 4)]
    Browse,

    /// Facet counts for a query
    #[command(display_order = 5)]
    Stats {
        text: Option<String>,

        #[command(flatten)]
        facets: FacetArgs,
    },

    /// Show how ability markup is parsed
    #[command(display_order = 10)]
    Parse { text: String },

    /// Strip tokens outside the icon vocabulary
    #[command(display_order = 11)]
    Sanitize { text: String },

    /// List the icon vocabulary
    #[command(display_order = 12)]
    Icons,

    /// Show or set configuration
    #[command(display_order = 20)]
    Config {
        /// Key (cards_path, index_fields, line_width)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
}
