use crate::core::surface::Surface;

pub fn render(out: &mut dyn Surface) {
    out.title("🚀 Cross-Blockchain Payment Gateway");
    out.image(
        "Assets/cross-blockchain/Screenshot 2024-08-09 072952.png",
        Some("🔗 Seamless Ethereum Transfers Across Blockchains"),
    );

    out.heading("🌐 Revolutionizing Cross-Chain Transactions");
    out.markdown(
        r#"**Welcome to the Future of Decentralized Finance with nextPay!**
Imagine effortlessly transferring Ethereum across different blockchains, all within a single, secure platform. nextPay takes the complexity out of cross-chain payments, providing you with a seamless and intuitive experience.
💸 **Say goodbye to the traditional challenges** of cross-blockchain transactions—no more juggling between wallets or worrying about high fees. With nextPay, your financial transactions are simple, secure, and fast."#,
    );

    out.heading("🔒 Supported Blockchains");
    out.markdown(
        r#"nextPay is fully compatible with a range of EVM-based blockchains, ensuring that your Ethereum can move freely across the following ecosystems:

- **Ethereum** 🌍
- **Binance Smart Chain** 🛡️
- **Polygon** 🛠️
- **Avalanche** ❄️

And this is just the beginning! Our team is constantly working to integrate more blockchains, giving you even greater flexibility and choice."#,
    );

    out.heading("✨ Key Benefits of nextPay");
    out.markdown(
        r#"nextPay isn't just another payment gateway; it's a transformative tool designed to make your financial life easier and more efficient:

- **🧩 Simplified Cross-Chain Transactions:** We handle all the complexities, so you don't have to. Moving Ethereum between different blockchain ecosystems has never been easier.
- **💰 Cost-Effective Transfers:** nextPay optimizes transaction fees, ensuring that your funds go further. Why pay more when you don't have to?
- **🔊 Real-Time Audio Notifications:** Our Soundbox feature delivers instant audio confirmations for every transaction, so you're always in the loop. Stay informed, stay in control."#,
    );

    out.image(
        "Assets/cross-blockchain/Screenshot 2024-08-09 073022.png",
        Some("🔗 Seamless Ethereum Transfers Across Blockchains"),
    );
    out.heading("🤝 Integration with DeFi Apps");
    out.markdown(
        r#"nextPay is designed to fit seamlessly into the broader DeFi ecosystem. Whether you're a developer or an end-user, our platform's cross-chain capabilities can enhance your interaction with decentralized finance applications.

- **🌍 Interoperability:** nextPay plays well with others, allowing you to leverage our powerful payment gateway within your preferred DeFi apps.
- **🔧 Customizable Solutions:** Tailor nextPay to your needs, whether you're a DeFi developer looking to integrate our services or an investor managing a diversified portfolio."#,
    );

    out.heading("👨‍💻 For Developers: How Cross-Blockchain Transactions Work");
    out.markdown(
        r#"Developers, let's dive into how nextPay facilitates cross-blockchain transactions within the EVM-based ecosystem. At the core of our cross-chain capability is a Solidity smart contract designed to handle token transfers securely and efficiently.

Here's a quick overview of the smart contract:

```solidity
// SPDX-License-Identifier: MIT
pragma solidity ^0.8.8;

contract TransferTokens {
    event Transfer(
        address indexed _from,
        address indexed _to,
        uint256 _amount,
        string _name,
        string _blockchain
    );

    function transferEther(
        address payable _to,
        string memory _name,
        string memory _blockchain
    ) external payable {
        require(_to != address(0), "Invalid recipient address");
        payable(_to).transfer(msg.value);
        emit Transfer(msg.sender, _to, msg.value, _name, _blockchain);
    }

    function check() public pure returns (string memory) {
        return "Shashwat Singh";
    }
}
```

**How It Works:**

- **Transfer Functionality:** The `transferEther` function is designed to facilitate the transfer of Ether from one address to another on the same blockchain. The function requires the recipient's address, a name string, and the blockchain identifier.
- **Event Emission:** Each transfer triggers the `Transfer` event, which logs critical transaction details, including sender and recipient addresses, the amount transferred, and the blockchain involved.
- **Cross-Blockchain Coordination:** While this contract operates on individual blockchains, nextPay coordinates transactions across different EVM-compatible blockchains by deploying similar contracts on each supported chain. The platform then links these transactions, enabling a seamless cross-chain transfer experience for users.
- **Security Considerations:** By using a decentralized approach and requiring valid recipient addresses, the contract ensures that funds are securely transferred without vulnerabilities that could be exploited.

**Customizability:**

- The contract's simplicity allows for easy customization to include additional features, such as transaction limits, multi-signature approvals, or integration with other smart contracts to expand functionality across the DeFi ecosystem.

nextPay abstracts these technical details, providing users with a simple interface for cross-chain transfers while ensuring that the underlying process remains secure and efficient."#,
    );
}
