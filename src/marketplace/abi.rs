//! Bindings for the fixed AntiqueMarketplace contract interface.
//!
//! The ABI is owned by the externally deployed contract; the field order of
//! the `Antique` tuple must match it exactly or decoding of `getAllAntiques`
//! silently shifts every field.

use alloy::sol;

sol! {
    #[sol(rpc)]
    contract AntiqueMarketplace {
        struct Antique {
            uint256 itemId;
            string[] reviews;
            address[] reviewers;
            string description;
            string category;
            uint256 price;
            address owner;
            string itemTitle;
            uint256 yearOfOrigin;
            string condition;
            bool isAuthenticated;
            bool isDeleted;
            string origin;
        }

        event AntiqueListedForSale(uint256 indexed id, address indexed owner, uint256 price);
        event AntiqueSold(uint256 indexed id, address indexed oldOwner, address indexed newOwner, uint256 price);
        event AntiqueDeleted(uint256 indexed id, address indexed owner);

        function listAntique(
            address owner,
            uint256 price,
            string memory itemTitle,
            string memory category,
            string memory description,
            uint256 yearOfOrigin,
            string memory condition,
            string memory origin,
            bool isAuthenticated
        ) external returns (uint256);

        function buyAntique(uint256 itemId) external;

        function deleteAntique(uint256 itemId) external;

        function addReview(uint256 itemId, uint256 rating, string memory comment) external;

        function antiqueIndex() external view returns (uint256);

        function getAllAntiques() external view returns (Antique[] memory);
    }
}
