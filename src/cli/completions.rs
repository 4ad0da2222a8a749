use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    modkeep completions bash > ~/.bash_completion.d/modkeep\n\n\
                  Generate zsh completions:\n    modkeep completions zsh > ~/.zfunc/_modkeep\n\n\
                  Generate fish completions:\n    modkeep completions fish > ~/.config/fish/completions/modkeep.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
