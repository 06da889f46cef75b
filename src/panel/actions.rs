/// Everything the panel can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    FetchUser,
    FetchUserWallets,
    FetchPublicClient,
    FetchWalletClient,
    SignMessage,
    FetchCount,
    Mint,
    SwitchNetwork,
    Delegate,
    Clear,
}

impl Action {
    /// Menu order.
    pub const ALL: [Action; 10] = [
        Action::FetchUser,
        Action::FetchUserWallets,
        Action::FetchPublicClient,
        Action::FetchWalletClient,
        Action::SignMessage,
        Action::FetchCount,
        Action::Mint,
        Action::SwitchNetwork,
        Action::Delegate,
        Action::Clear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::FetchUser => "Fetch User",
            Action::FetchUserWallets => "Fetch User Wallets",
            Action::FetchPublicClient => "Fetch Public Client",
            Action::FetchWalletClient => "Fetch Wallet Client",
            Action::SignMessage => "Sign \"Hello World\"",
            Action::FetchCount => "Fetch Count",
            Action::Mint => "Mint Tokens",
            Action::SwitchNetwork => "Switch Network",
            Action::Delegate => "Delegate Tokens",
            Action::Clear => "Clear",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            Action::FetchUser => 'u',
            Action::FetchUserWallets => 'w',
            Action::FetchPublicClient => 'p',
            Action::FetchWalletClient => 'k',
            Action::SignMessage => 's',
            Action::FetchCount => 'f',
            Action::Mint => 'm',
            Action::SwitchNetwork => 't',
            Action::Delegate => 'd',
            Action::Clear => 'c',
        }
    }

    pub fn from_hotkey(key: char) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|a| a.hotkey() == key.to_ascii_lowercase())
    }

    /// Only offered when the primary wallet is an EVM wallet.
    pub fn requires_evm(&self) -> bool {
        !matches!(self, Action::FetchUser | Action::FetchUserWallets | Action::Clear)
    }
}
