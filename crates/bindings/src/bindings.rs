#![allow(clippy::too_many_arguments)]
#![allow(missing_docs)]
use alloy::primitives::{Address, U256};

mod erc20 {
    use super::*;

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface IERC20 {
            event Transfer(address indexed from, address indexed to, uint256 value);
            event Approval(address indexed owner, address indexed spender, uint256 value);

            function totalSupply() external view returns (uint256);
            function balanceOf(address account) external view returns (uint256);
            function transfer(address to, uint256 value) external returns (bool);
            function allowance(address owner, address spender) external view returns (uint256);
            function approve(address spender, uint256 value) external returns (bool);
            function transferFrom(address from, address to, uint256 value) external returns (bool);
        }
    );

    impl Copy for IERC20::Transfer {}
    impl Copy for IERC20::Approval {}

    impl IERC20::Transfer {
        /// Get the sender of the tokens.
        pub const fn sender(&self) -> Address {
            self.from
        }

        /// Get the recipient of the tokens.
        pub const fn recipient(&self) -> Address {
            self.to
        }

        /// Get the amount transferred.
        pub const fn amount(&self) -> U256 {
            self.value
        }
    }

    impl IERC20::Approval {
        /// Get the owner granting the allowance.
        pub const fn owner(&self) -> Address {
            self.owner
        }

        /// Get the spender receiving the allowance.
        pub const fn spender(&self) -> Address {
            self.spender
        }

        /// Get the approved amount.
        pub const fn amount(&self) -> U256 {
            self.value
        }
    }
}

mod erc721 {
    use super::*;

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface IERC721 {
            event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
            event Approval(address indexed owner, address indexed approved, uint256 indexed tokenId);
            event ApprovalForAll(address indexed owner, address indexed operator, bool approved);

            function balanceOf(address owner) external view returns (uint256);
            function ownerOf(uint256 tokenId) external view returns (address);
            function getApproved(uint256 tokenId) external view returns (address);
            function isApprovedForAll(address owner, address operator) external view returns (bool);
            function approve(address to, uint256 tokenId) external;
            function setApprovalForAll(address operator, bool approved) external;
            function transferFrom(address from, address to, uint256 tokenId) external;
            function safeTransferFrom(address from, address to, uint256 tokenId) external;
        }
    );

    impl Copy for IERC721::Transfer {}
    impl Copy for IERC721::Approval {}
    impl Copy for IERC721::ApprovalForAll {}

    impl IERC721::Transfer {
        /// Get the previous owner.
        pub const fn previous_owner(&self) -> Address {
            self.from
        }

        /// Get the new owner.
        pub const fn new_owner(&self) -> Address {
            self.to
        }

        /// Get the token ID.
        pub const fn token_id(&self) -> U256 {
            self.tokenId
        }
    }
}

mod marketplace {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        contract NftMarketplace {
            constructor(address[] memory supportedPayments) payable;

            function getSupportedPayments() external view returns (address[] memory);
            function getPriceFeed(address token) external view returns (address);
        }
    );
}

pub use erc20::IERC20;
pub use erc721::IERC721;
pub use marketplace::NftMarketplace;
