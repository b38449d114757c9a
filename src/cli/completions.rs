use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    envforge completions --shell bash > ~/.bash_completion.d/envforge\n\n\
                  Generate zsh completions:\n    envforge completions --shell zsh > ~/.zfunc/_envforge\n\n\
                  Generate fish completions:\n    envforge completions --shell fish > ~/.config/fish/completions/envforge.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
