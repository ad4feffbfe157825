use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored credentials
    Logout,

    /// Validate stored credentials and print the current user
    Whoami,

    /// Exchange the refresh token for a new credential pair
    Refresh,

    /// Update the current user's profile
    Update {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Repeat for each skill; replaces the whole list
        #[arg(long = "skill")]
        skills: Vec<String>,
        /// Repeat for each interest; replaces the whole list
        #[arg(long = "interest")]
        interests: Vec<String>,
        /// beginner, intermediate or advanced
        #[arg(long)]
        experience_level: Option<String>,
    },

    /// Authorized GET against any API path
    Get {
        /// Path relative to the API base URL, e.g. /recommendations
        path: String,
    },

    /// Authorized POST with a JSON body against any API path
    Post {
        path: String,
        /// JSON request body; defaults to `{}`
        #[arg(long)]
        data: Option<String>,
    },

    /// Authorized PUT with a JSON body against any API path
    Put {
        path: String,
        /// JSON request body; defaults to `{}`
        #[arg(long)]
        data: Option<String>,
    },
}
