use crate::core::surface::Surface;

pub fn render(out: &mut dyn Surface) {
    out.title("🚀 Competition and Roadmap");

    out.heading("🌐 Competitive Landscape");
    out.markdown(
        "nextPay operates in a dynamic space with various players in the decentralized finance (DeFi) and blockchain payment sectors. Here's how nextPay stands out from its key competitors:",
    );

    out.heading("🤼 Competitors");
    out.markdown(
        r#"### 1. MoonPay 🌕

- **What They Do:** MoonPay provides a payment infrastructure for cryptocurrencies, allowing users to buy and sell crypto using traditional payment methods like credit cards and bank transfers. They also offer KYC services.
- **Edge Over Them:** While MoonPay focuses on fiat-to-crypto solutions, nextPay differentiates itself with cross-blockchain Ethereum transfers and anonymous Aadhaar-based KYC. Our use of zk-SNARKs for privacy and real-time transaction notifications via the Soundbox offer enhanced user experience and security not available with MoonPay.

### 2. Ramp 🚀

- **What They Do:** Ramp specializes in crypto on-ramps, providing KYC services and seamless fiat-to-crypto transactions. They are known for their user-friendly interfaces and integration with various crypto platforms.
- **Edge Over Them:** Ramp focuses on fiat on-ramps and KYC, but nextPay's cross-blockchain payment gateway simplifies Ethereum transfers across multiple EVM-based blockchains. Additionally, our anonymous KYC process and Soundbox for instant transaction confirmations offer unique features that Ramp lacks.

### 3. Transak 🔄

- **What They Do:** Transak is a fiat-to-crypto gateway that offers KYC, AML (Anti-Money Laundering) compliance, and onboarding services for various cryptocurrencies.
- **Edge Over Them:** Transak excels in fiat on-ramps and KYC compliance, but nextPay goes beyond with cross-blockchain transactions and real-time notifications. Our zk-SNARK-based anonymous KYC provides superior privacy.

### 4. Circle (USDC) 💵

- **What They Do:** Circle is the issuer of USDC, a leading stablecoin, and provides services like Circle Account and Circle APIs for businesses to integrate stablecoins into their operations.
- **Edge Over Them:** Circle focuses on stablecoins and fiat-backed cryptocurrencies, whereas nextPay's cross-blockchain payment gateway supports a broader range of EVM blockchains. Our Soundbox feature adds a real-time, interactive element that Circle's offerings lack.

### 5. Trust Wallet 🔒

- **What They Do:** Trust Wallet is a popular mobile wallet supporting a wide range of cryptocurrencies, allowing users to buy, store, and swap tokens, with in-app KYC for fiat-to-crypto purchases.
- **Edge Over Them:** Trust Wallet primarily serves as a storage and swapping tool with limited cross-blockchain capabilities and real-time notifications. nextPay offers a comprehensive solution with a decentralized payment gateway, anonymous KYC, and the Soundbox, providing a richer platform for cross-blockchain functionalities."#,
    );

    out.heading("🗺️ Roadmap");
    out.markdown(
        "nextPay is committed to continuous innovation and expanding its features. Here's a high-level roadmap for the platform:",
    );
    out.markdown(
        r#"- **Phase 1 (Current):**
    - Anon Aadhaar-based anonymous KYC
    - Cross-blockchain Ethereum transfers
    - Soundbox for real-time transaction notifications
- **Phase 2 (Q3 2024):**
    - Integration with popular DeFi platforms
    - Expansion to additional EVM-based blockchains
    - Introduction of a native nextPay token
- **Phase 3 (Q1 2025):**
    - Decentralized identity management system
    - Advanced financial services (lending, staking, etc.)
    - Expanded Soundbox features (customizable alerts, smart contract monitoring)
- **Phase 4 (Q3 2025):**
    - Integration with traditional financial institutions
    - Fiat on-ramp and off-ramp capabilities
    - Governance and DAO implementation"#,
    );

    out.markdown(
        "We are dedicated to staying ahead of the competition and continuously enhancing the nextPay platform to provide the best decentralized financial experience for our users. 🌟",
    );
}
