use crate::core::surface::Surface;

pub fn render(out: &mut dyn Surface) {
    out.title("🌟 Welcome to nextPay - The Future of Decentralized Finance 🚀");
    out.image("Assets/home/black white Thunder logo.png", None);
    out.markdown(
        r#"**nextPay** is not just another decentralized platform—it's a revolution in how you manage and transfer Ethereum across the EVM-based blockchain ecosystem.
Our platform is designed to transcend the traditional limitations of cross-chain transactions, offering a seamless, secure, and intuitive experience.

Whether you're a DeFi enthusiast, a crypto trader, or simply someone looking to simplify their financial transactions, nextPay has something for everyone. 🌐"#,
    );

    out.heading("🔍 Product Overview");
    out.markdown(
        r#"nextPay is engineered with cutting-edge blockchain technology, ensuring that your Ethereum can move freely across various EVM-based blockchains without the usual hassle.
Our platform is built to handle everything from everyday transactions to complex financial operations with ease. Here's what makes nextPay stand out:

- **🛡️ Anon Aadhaar Integration:** A secure, anonymous KYC process that uses Aadhaar for identity verification without compromising your privacy.
- **🔗 Cross-Blockchain Payments:** Seamlessly transfer Ethereum across multiple EVM-compatible chains like Ethereum, Binance Smart Chain, Polygon, and more.
- **🔊 Soundbox:** Stay updated with real-time audio notifications for every transaction, ensuring you never miss a beat.
- **📅 Competition & Roadmap:** Engage with our community, track our progress, and participate in exciting challenges and events.
- **❓ FAQs:** Got questions? We've got answers. Navigate to our FAQ section to learn more about how nextPay works and how it can benefit you.
- **🤝 Get Involved:** Whether you're a developer or an end-user, there's a place for you in the nextPay ecosystem. Discover how you can contribute to our growing community."#,
    );

    out.heading("🚀 Use Cases");
    out.markdown(
        r#"nextPay isn't just a platform—it's a versatile tool designed to meet the diverse needs of our users. Here are some ways you can leverage nextPay:

- **DeFi Investors:** Optimize your yield farming, staking, and lending activities across multiple chains without the complexity of moving funds manually.
- **Crypto Traders:** Execute cross-chain trades with minimal fees and instant settlement times, giving you the edge in volatile markets.
- **Everyday Users:** Simplify your daily transactions with a user-friendly interface that makes cross-chain payments as easy as sending an email.
- **Businesses:** Integrate nextPay into your operations for secure, transparent, and cost-effective payment solutions across different blockchain networks."#,
    );

    out.heading("✨ Key Benefits");
    out.markdown(
        r#"nextPay offers unparalleled advantages over traditional cross-chain solutions:

- **🚀 Seamless Integration:** nextPay fits seamlessly into your existing DeFi activities, with deep integration into the EVM ecosystem.
- **🔐 Enhanced Security:** Our platform is built with robust security protocols, ensuring that your assets are protected at all times.
- **⚡ Lightning-Fast Transactions:** Experience near-instant transaction speeds, even when transferring assets across different blockchains.
- **💰 Cost-Effective:** nextPay optimizes transaction fees, ensuring that you retain more of your assets with every transfer.
- **🔊 Real-Time Notifications:** Our Soundbox feature ensures that you're always in the loop with instant audio alerts for every transaction."#,
    );

    out.heading("🔍 Explore More");
    out.markdown(
        r#"Dive deeper into nextPay's features and offerings by exploring the following sections:

- [Anon Aadhaar](#anon-aadhaar) - Learn more about our anonymous KYC process.
- [Cross-Blockchain Payments](#cross-blockchain-payments) - Discover how easy it is to transfer Ethereum across different blockchains.
- [Soundbox](#soundbox) - Get the details on our real-time transaction notifications.
- [Competition & Roadmap](#competition-and-roadmap) - Stay updated on our latest developments and community challenges.
- [FAQs](#faqs) - Find answers to your most pressing questions.
- [Get Involved](#get-involved) - Join our community and contribute to the future of decentralized finance."#,
    );

    out.heading("🎉 Join the nextPay Revolution Today!");
    out.markdown(
        r#"Whether you're here to manage your crypto assets, explore new opportunities in DeFi, or simply learn more about the power of blockchain technology, nextPay is your go-to platform.
Sign up today and become part of the decentralized finance revolution! 🚀"#,
    );
}
