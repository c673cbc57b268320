use crate::core::surface::Surface;

pub fn render(out: &mut dyn Surface) {
    out.title("❓ FAQs");

    out.heading("Q1: How does nextPay ensure user privacy during the KYC process?");
    out.markdown(
        "🔐 nextPay leverages cutting-edge zk-SNARK technology to deliver an anonymous Aadhaar-based KYC process. This means that while we verify your identity, your personal information remains confidential and secure. Only the essential verification proof is stored, ensuring maximum privacy.",
    );

    out.heading("Q2: What is zk-SNARK, and why is it important?");
    out.markdown(
        "🛡️ zk-SNARK stands for 'Zero-Knowledge Succinct Non-Interactive Argument of Knowledge.' It's a cryptographic technique that enables one party to prove they know a specific value without disclosing the value itself. In nextPay, zk-SNARK is crucial for preserving user privacy during the KYC process, ensuring your data is protected.",
    );

    out.heading("Q3: Which blockchains are supported by nextPay?");
    out.markdown(
        "🌍 nextPay currently supports several EVM-based blockchains, including Ethereum, Binance Smart Chain, Polygon, and Avalanche. We are actively working to expand our compatibility to include additional blockchains, providing you with broader coverage and flexibility.",
    );

    out.heading("Q4: How does the Soundbox feature work?");
    out.markdown(
        "🔔 The Soundbox feature delivers real-time audio alerts for each transaction. Users can personalize these alerts based on their preferences for specific blockchains and transaction types, keeping you updated and in control of your financial activities.",
    );

    out.heading("Q5: What happens if the user is under 18?");
    out.markdown(
        "🚫 If a user is under 18, nextPay will restrict access to the platform to ensure compliance with legal requirements and safeguard minors from engaging in financial activities that require legal age.",
    );

    out.heading("Q6: How does nextPay handle cross-blockchain transactions?");
    out.markdown(
        "🔄 nextPay employs a secure cross-blockchain payment gateway to facilitate Ethereum transfers across various EVM-based blockchains. Our platform manages the entire conversion and transfer process, ensuring transactions are executed smoothly and efficiently.",
    );

    out.heading("Q7: What makes nextPay different from other decentralized finance platforms?");
    out.markdown(
        "✨ nextPay distinguishes itself with a unique blend of anonymous Aadhaar-based KYC, cross-blockchain payment capabilities, and real-time transaction alerts through the Soundbox. This combination delivers a more secure, private, and informed financial experience compared to other DeFi platforms.",
    );

    out.heading("Q8: Can nextPay be integrated with other DeFi applications?");
    out.markdown(
        "🔗 Absolutely! nextPay is designed to be interoperable with other DeFi applications, allowing you to leverage our features in conjunction with a variety of tools and services within the decentralized finance ecosystem.",
    );
}
